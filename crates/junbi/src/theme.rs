//! Color themes for the splash display.

use ratatui::style::Color;

/// Color theme for the splash display.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ColorTheme {
    #[default]
    Cyan,
    Green,
    White,
    Magenta,
    Yellow,
    Red,
    Blue,
}

impl ColorTheme {
    /// Parse a theme name from config, falling back to the default.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "green" => ColorTheme::Green,
            "white" => ColorTheme::White,
            "magenta" => ColorTheme::Magenta,
            "yellow" => ColorTheme::Yellow,
            "red" => ColorTheme::Red,
            "blue" => ColorTheme::Blue,
            _ => ColorTheme::Cyan,
        }
    }

    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Yellow,
            ColorTheme::Yellow => ColorTheme::Red,
            ColorTheme::Red => ColorTheme::Blue,
            ColorTheme::Blue => ColorTheme::White,
            ColorTheme::White => ColorTheme::Cyan,
        }
    }

    /// Convert theme to a Ratatui color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Cyan => Color::Cyan,
            ColorTheme::Green => Color::Green,
            ColorTheme::White => Color::White,
            ColorTheme::Magenta => Color::Magenta,
            ColorTheme::Yellow => Color::Yellow,
            ColorTheme::Red => Color::Red,
            ColorTheme::Blue => Color::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_fallback() {
        assert_eq!(ColorTheme::from_name("green"), ColorTheme::Green);
        assert_eq!(ColorTheme::from_name("GREEN"), ColorTheme::Green);
        assert_eq!(ColorTheme::from_name("mauve"), ColorTheme::Cyan);
    }

    #[test]
    fn test_cycle_visits_every_theme() {
        let mut theme = ColorTheme::default();
        for _ in 0..7 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::default());
    }
}
