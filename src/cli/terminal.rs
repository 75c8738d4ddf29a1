//! Terminal capability detection and utilities

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Colors text as a warning (amber) when `enabled`, otherwise returns it as is
pub fn paint_warning(text: &str, enabled: bool) -> String {
    if enabled {
        text.fg::<css::Orange>().to_string()
    } else {
        text.to_string()
    }
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_is_plain_when_disabled() {
        assert_eq!(paint_warning("Invalid choice.", false), "Invalid choice.");
    }

    #[test]
    fn warning_is_escaped_when_enabled() {
        let painted = paint_warning("Invalid choice.", true);
        assert!(painted.starts_with('\u{1b}'));
        assert!(painted.contains("Invalid choice."));
    }
}
