use ratatui::style::Color;
use std::env;

/// Color scheme that respects NO_COLOR environment variable
/// See https://no-color.org/
#[derive(Clone, Copy)]
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    /// Create a new color scheme based on NO_COLOR environment variable
    pub fn from_env() -> Self {
        // NO_COLOR disables colors if set to any value (even empty string)
        let enabled = env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Create a new color scheme with explicit enabled state
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn pick(&self, color: Color) -> Color {
        if self.enabled {
            color
        } else {
            Color::Reset
        }
    }

    /// Get color for the expand marker
    pub fn ellipsis(&self) -> Color {
        self.pick(Color::Cyan)
    }

    /// Get color for the truncated state indicator
    pub fn truncated(&self) -> Color {
        self.pick(Color::Yellow)
    }

    /// Get color for the full state indicator
    pub fn full(&self) -> Color {
        self.pick(Color::Green)
    }

    /// Get color for the expanded state indicator
    pub fn expanded(&self) -> Color {
        self.pick(Color::Magenta)
    }

    /// Get color for waiting/measuring indicators
    pub fn pending(&self) -> Color {
        self.pick(Color::Gray)
    }

    /// Format a string with ANSI color codes (for text mode)
    /// Returns the string unchanged if colors are disabled
    pub fn ansi_format(&self, text: &str, ansi_code: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", ansi_code, text)
        } else {
            text.to_string()
        }
    }

    /// ANSI cyan (36)
    pub fn ansi_cyan(&self, text: &str) -> String {
        self.ansi_format(text, "36")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_enabled() {
        let scheme = ColorScheme::new(true);
        assert!(matches!(scheme.ellipsis(), Color::Cyan));
        assert!(matches!(scheme.truncated(), Color::Yellow));
        assert!(matches!(scheme.full(), Color::Green));
    }

    #[test]
    fn test_ansi_colors_enabled() {
        let scheme = ColorScheme::new(true);
        assert_eq!(scheme.ansi_cyan("more"), "\x1b[36mmore\x1b[0m");
        assert_eq!(scheme.ansi_format("more", "1"), "\x1b[1mmore\x1b[0m");
    }

    #[test]
    fn test_colors_disabled() {
        let scheme = ColorScheme::new(false);
        assert!(matches!(scheme.ellipsis(), Color::Reset));
        assert!(matches!(scheme.expanded(), Color::Reset));
        assert!(matches!(scheme.pending(), Color::Reset));
    }

    #[test]
    fn test_ansi_colors_disabled() {
        let scheme = ColorScheme::new(false);
        assert_eq!(scheme.ansi_cyan("more"), "more");
    }
}
