//! ANSI color helpers for CLI text

use super::Theme;

/// ANSI color codes for CLI output
pub mod ansi {
    /// Green (ANSI 32) - success lines and headers
    pub const GREEN: &str = "\x1b[32m";
    /// Red (ANSI 31) - skipped files and errors
    pub const RED: &str = "\x1b[31m";
    /// Dark gray (ANSI 90) - secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}

impl Theme {
    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(ansi::GREEN, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(ansi::RED, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(ansi::DARK_GRAY, text)
    }
}
