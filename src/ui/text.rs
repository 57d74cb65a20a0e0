//! Text fitting helpers shared by the card widgets

use textwrap::WrapAlgorithm;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate string to fit within max_width, adding ellipsis if needed
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "…".repeat(max_width);
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Word-wrap `text` to `width` columns with no line limit.
/// Lines are filled greedily, long words are broken.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let options = textwrap::Options::new(width).wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Word-wrap `text` to at most `max_lines` lines.
/// When text is cut, the last kept line ends with an ellipsis.
pub fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap(text, width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        *last = truncate(&format!("{}…", last.trim_end()), width);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("hello", 1), "…");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("Gigantes tecnológicos", 12), ["Gigantes", "tecnológicos"]);
        assert_eq!(wrap("Gigantes tecnológicos", 10), ["Gigantes", "tecnológic", "os"]);
        assert_eq!(wrap("corto", 40), ["corto"]);
        assert!(wrap("algo", 0).is_empty());
    }

    #[test]
    fn test_wrap_fills_lines_first() {
        assert_eq!(wrap("aa bb cc dddddd", 8), ["aa bb cc", "dddddd"]);
        let title = "El presidente de EE.UU. no muestra signos de arrepentimiento...";
        assert_eq!(wrap(title, 16)[0], "El presidente de");
    }

    #[test]
    fn test_wrap_empty() {
        let lines = wrap("", 10);
        assert!(lines.iter().all(|l| l.is_empty()));
    }

    #[test]
    fn test_wrap_clamped_fits() {
        let lines = wrap_clamped("Bañarse en la piscina", 26, 2);
        assert_eq!(lines, ["Bañarse en la piscina"]);
    }

    #[test]
    fn test_wrap_clamped_ellipsis() {
        let title = "El presidente de EE.UU. no muestra signos de arrepentimiento...";
        let lines = wrap_clamped(title, 16, 2);

        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
        assert!(lines.iter().all(|l| l.width() <= 16));
        assert_eq!(lines[0], "El presidente de");
    }

    #[test]
    fn test_wrap_clamped_full_last_line() {
        // Second line fills the width exactly, the ellipsis replaces its last char
        let lines = wrap_clamped("aaaa bbbb cccc", 4, 2);
        assert_eq!(lines, ["aaaa", "bbb…"]);
    }
}
