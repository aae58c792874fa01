//! Color palettes for the dark and light themes.
//!
//! The active palette follows the stored [`ThemePreference`]; toggling the
//! theme in the TUI persists the choice for the next run.

use ratatui::style::Color;

use crate::storage::ThemePreference;

/// Semantic colors used across all widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Primary text content
    pub text: Color,
    /// Labels, help text, dim content
    pub text_muted: Color,
    /// Focused field and selection highlights
    pub accent: Color,
    /// Validation and clipboard errors
    pub error: Color,
    /// Success feedback
    pub success: Color,
    /// Widget borders and titles
    pub border: Color,
    /// Background for the focused input field
    pub highlight_bg: Color,
}

impl Palette {
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    /// Bright colors on a dark terminal background
    pub const fn dark() -> Self {
        Self {
            text: Color::White,
            text_muted: Color::Gray,
            accent: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
            border: Color::DarkGray,
            highlight_bg: Color::Rgb(40, 40, 40),
        }
    }

    /// Darker colors for light terminal backgrounds
    pub const fn light() -> Self {
        Self {
            text: Color::Black,
            text_muted: Color::Rgb(60, 60, 60),
            accent: Color::Blue,
            error: Color::Red,
            success: Color::Rgb(0, 128, 0),
            border: Color::Gray,
            highlight_bg: Color::Rgb(230, 230, 230),
        }
    }
}
