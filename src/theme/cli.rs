//! ANSI color helpers for CLI output

use super::{Color, Theme};

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color codes for CLI output - exposed for clap styling
pub mod ansi {
    /// Gray color (ANSI 37) - used for descriptions
    pub const GRAY: &str = "\x1b[37m";
    /// Green color (ANSI 32) - used for accent/headers
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow color (ANSI 33) - used for warnings
    pub const YELLOW: &str = "\x1b[33m";
    /// Red color (ANSI 31) - used for errors
    pub const RED: &str = "\x1b[31m";
    /// Dark gray (ANSI 90) - used for secondary text
    pub const DARK_GRAY: &str = "\x1b[90m";
    /// Reset color
    pub const RESET: &str = "\x1b[0m";
}

/// Convert a theme Color to an ANSI escape code.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Red => ansi::RED,
        Color::Green => ansi::GREEN,
        Color::Yellow => ansi::YELLOW,
        Color::Gray => ansi::GRAY,
        Color::DarkGray => ansi::DARK_GRAY,
        Color::LightGreen => "\x1b[92m",
        Color::Reset => "",
    }
}

impl Theme {
    fn paint(&self, color: Color, text: &str) -> String {
        let code = color_to_ansi(color);
        if !self.enabled || code.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", code, text, ANSI_RESET)
    }

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}
