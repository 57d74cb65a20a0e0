//! Theme system for newsdeck
//!
//! Provides:
//! - Theme struct with all screen colors
//! - Built-in presets (light, dark, nord)
//! - Hex color parsing for config overrides

use ratatui::style::Color;
use thiserror::Error;

/// Colors of the text chip overlaid on world cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipColors {
    pub background: Color,
    pub text: Color,
}

impl Default for ChipColors {
    fn default() -> Self {
        Self {
            background: Color::Rgb(236, 236, 236), // #ececec
            text: Color::Rgb(17, 17, 17),          // #111111
        }
    }
}

/// Theme colors for the screen
#[derive(Debug, Clone)]
pub struct Theme {
    /// Page background
    pub background: Color,
    /// Headings, active tab, typed search text
    pub foreground: Color,
    /// Placeholder, inactive tabs, status bar
    pub muted: Color,
    /// Top card fill and tab underline
    pub primary: Color,
    /// Title text on primary surfaces
    pub on_primary: Color,
    /// Date text on primary surfaces
    pub on_primary_muted: Color,
    /// Search field border
    pub border: Color,
    /// World card chip
    pub chip: ChipColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Light theme - default, white page with violet accents
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),       // #ffffff
            foreground: Color::Rgb(17, 17, 17),          // #111111
            muted: Color::Rgb(154, 160, 166),            // #9aa0a6
            primary: Color::Rgb(108, 77, 255),           // #6c4dff
            on_primary: Color::Rgb(255, 255, 255),       // #ffffff
            on_primary_muted: Color::Rgb(243, 243, 243), // #ffffff @ 95%
            border: Color::Rgb(176, 176, 176),           // #b0b0b0
            chip: ChipColors::default(),
        }
    }

    /// Dark theme
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 24),          // #121218
            foreground: Color::Rgb(236, 236, 240),       // #ececf0
            muted: Color::Rgb(128, 134, 140),            // #80868c
            primary: Color::Rgb(108, 77, 255),           // #6c4dff
            on_primary: Color::Rgb(255, 255, 255),       // #ffffff
            on_primary_muted: Color::Rgb(220, 214, 255), // #dcd6ff
            border: Color::Rgb(72, 72, 84),              // #484854
            chip: ChipColors {
                background: Color::Rgb(44, 44, 54),      // #2c2c36
                text: Color::Rgb(236, 236, 240),         // #ececf0
            },
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),          // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),       // #eceff4 (nord6)
            muted: Color::Rgb(76, 86, 106),              // #4c566a (nord3)
            primary: Color::Rgb(94, 129, 172),           // #5e81ac (nord10)
            on_primary: Color::Rgb(236, 239, 244),       // #eceff4 (nord6)
            on_primary_muted: Color::Rgb(216, 222, 233), // #d8dee9 (nord4)
            border: Color::Rgb(67, 76, 94),              // #434c5e (nord2)
            chip: ChipColors {
                background: Color::Rgb(59, 66, 82),      // #3b4252 (nord1)
                text: Color::Rgb(236, 239, 244),         // #eceff4 (nord6)
            },
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            "nord" => Some(Self::nord()),
            _ => None,
        }
    }

    /// Replace chip colors that are set
    pub fn with_chip_overrides(mut self, background: Option<Color>, text: Option<Color>) -> Self {
        if let Some(bg) = background {
            self.chip.background = bg;
        }
        if let Some(fg) = text {
            self.chip.text = fg;
        }
        self
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb, #rrggbbaa
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        // #rrggbb, #rrggbbaa (alpha ignored)
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Serde helpers for optional hex colors
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }

    pub fn serialize<S>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match color {
            Some(Color::Rgb(r, g, b)) => {
                serializer.serialize_some(&format!("#{:02x}{:02x}{:02x}", r, g, b))
            }
            _ => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#6c4dff"), Ok(Color::Rgb(108, 77, 255)));
        assert_eq!(parse_hex_color("ececec"), Ok(Color::Rgb(236, 236, 236)));
    }

    #[test]
    fn test_parse_hex_3() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("0f0"), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_8() {
        assert_eq!(parse_hex_color("#ff0000ff"), Ok(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex_color("invalid"), Err(ColorError::InvalidLength));
        assert_eq!(parse_hex_color("#gg0000"), Err(ColorError::InvalidHex));
        assert_eq!(parse_hex_color("#ff00"), Err(ColorError::InvalidLength));
        assert_eq!(parse_hex_color("#ñf0"), Err(ColorError::InvalidHex));
    }

    #[test]
    fn test_presets() {
        assert!(Theme::from_preset("light").is_some());
        assert!(Theme::from_preset("Dark").is_some());
        assert!(Theme::from_preset("nord").is_some());
        assert!(Theme::from_preset("nonexistent").is_none());
    }

    #[test]
    fn test_chip_overrides() {
        let theme = Theme::light().with_chip_overrides(Some(Color::Rgb(1, 2, 3)), None);
        assert_eq!(theme.chip.background, Color::Rgb(1, 2, 3));
        assert_eq!(theme.chip.text, ChipColors::default().text);
    }
}
