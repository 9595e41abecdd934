//! Theme configuration for CLI output
//!
//! Centralizes the colors used for run summaries and status lines.
//! Honours `NO_COLOR` (<https://no-color.org>).

pub mod cli;

pub use cli::{ansi, color_to_ansi, ANSI_RESET};

/// Terminal colors used by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Gray,
    DarkGray,
    LightGreen,
    /// No escape sequence at all
    Reset,
}

/// Theme configuration for the CLI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for file names and headers
    pub accent: Color,
    /// Warning color (LTOP reference-cap warnings)
    pub warning: Color,
    /// Error color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Whether escape sequences are emitted at all
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::field()
    }
}

impl Theme {
    /// Default theme - light gray text with green accent.
    pub fn field() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            warning: Color::Yellow,
            error: Color::Red,
            success: Color::LightGreen,
            enabled: true,
        }
    }

    /// Theme without any color, used when `NO_COLOR` is set.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::field()
        }
    }
}

/// Global theme instance, plain when `NO_COLOR` is set to a non-empty value.
pub fn current_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(value) if !value.is_empty() => Theme::plain(),
        _ => Theme::default(),
    }
}
