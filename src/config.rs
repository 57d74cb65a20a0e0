use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ui::layout::{CarouselLayout, GridLayout};
use crate::ui::theme::{serde_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub layout: LayoutConfig,
    pub images: ImagesConfig,
    pub news: NewsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset: "light", "dark", "nord"
    pub theme: String,
    /// Chip background override (hex)
    #[serde(with = "serde_color", skip_serializing_if = "Option::is_none")]
    pub chip_background: Option<Color>,
    /// Chip text override (hex)
    #[serde(with = "serde_color", skip_serializing_if = "Option::is_none")]
    pub chip_text: Option<Color>,
    /// Blank columns on each side of the page
    pub horizontal_padding: u16,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            chip_background: None,
            chip_text: None,
            horizontal_padding: 2,
        }
    }
}

/// Card sizes in terminal cells
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub top_card_width: u16,
    pub top_card_height: u16,
    pub world_card_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top_card_width: 30,
            top_card_height: 6,
            world_card_height: 9,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Draw images on world cards
    pub enabled: bool,
    /// Directory searched before the bundled assets
    pub dir: Option<PathBuf>,
    /// Use half-block images when no graphics protocol is detected
    pub halfblocks_fallback: bool,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: dirs::data_dir().map(|d| d.join("newsdeck/assets")),
            halfblocks_fallback: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// JSON file with "top" and "world" collections; built-in sample when unset
    pub file: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the theme preset and apply chip overrides
    pub fn resolve_theme(&self) -> Theme {
        let theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using light", self.appearance.theme);
            Theme::light()
        });
        theme.with_chip_overrides(self.appearance.chip_background, self.appearance.chip_text)
    }

    pub fn carousel_layout(&self) -> CarouselLayout {
        CarouselLayout {
            card_width: self.layout.top_card_width.max(4),
            card_height: self.layout.top_card_height.max(3),
            ..CarouselLayout::default()
        }
    }

    pub fn grid_layout(&self) -> GridLayout {
        GridLayout {
            card_height: self.layout.world_card_height.max(3),
            ..GridLayout::default()
        }
    }

    /// Image override directory with `~` expanded
    pub fn images_dir(&self) -> Option<PathBuf> {
        self.images.dir.as_ref().map(|d| expand_path(d))
    }

    /// News file with `~` expanded
    pub fn news_file(&self) -> Option<PathBuf> {
        self.news.file.as_ref().map(|f| expand_path(f))
    }
}

fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/newsdeck/config.toml").unwrap();
        assert_eq!(config.appearance.theme, "light");
        assert_eq!(config.layout.top_card_width, 30);
        assert!(config.images.enabled);
        assert!(config.news.file.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
[appearance]
theme = "dark"
chip_background = "#102030"

[layout]
world_card_height = 12

[news]
file = "/tmp/news.json"
"##
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.appearance.theme, "dark");
        assert_eq!(config.appearance.chip_background, Some(Color::Rgb(16, 32, 48)));
        assert_eq!(config.appearance.chip_text, None);
        assert_eq!(config.appearance.horizontal_padding, 2);
        assert_eq!(config.layout.world_card_height, 12);
        assert_eq!(config.layout.top_card_height, 6);
        assert_eq!(config.news_file(), Some(PathBuf::from("/tmp/news.json")));

        let theme = config.resolve_theme();
        assert_eq!(theme.chip.background, Color::Rgb(16, 32, 48));
        assert_eq!(theme.chip.text, Theme::dark().chip.text);
    }

    #[test]
    fn test_invalid_color_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[appearance]\nchip_text = \"#zzz\"").unwrap();

        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let mut config = Config::default();
        config.appearance.theme = "solarized".to_string();
        assert_eq!(config.resolve_theme().primary, Theme::light().primary);
    }

    #[test]
    fn test_layouts_from_config() {
        let mut config = Config::default();
        config.layout.top_card_width = 1;
        config.layout.world_card_height = 7;
        assert_eq!(config.carousel_layout().card_width, 4);
        assert_eq!(config.grid_layout().card_height, 7);
        assert_eq!(config.grid_layout().columns, 2);
    }
}
