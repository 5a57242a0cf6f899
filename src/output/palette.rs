//! Tile colors
//!
//! One RGB triple per feedback color, shared by the line-based renderer
//! (`colored`) and the full-screen one (`ratatui`).

use crate::core::FeedbackColor;
use colored::{ColoredString, Colorize};
use ratatui::style::Color;

/// Background colors for each kind of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub correct: (u8, u8, u8),
    pub wrong_spot: (u8, u8, u8),
    pub not_in_word: (u8, u8, u8),
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Palette {
    /// Green, yellow, gray
    pub const STANDARD: Self = Self {
        correct: (106, 170, 100),
        wrong_spot: (201, 180, 88),
        not_in_word: (120, 124, 126),
    };

    /// Orange, blue, gray
    pub const HIGH_CONTRAST: Self = Self {
        correct: (245, 121, 58),
        wrong_spot: (133, 192, 249),
        not_in_word: (120, 124, 126),
    };

    #[must_use]
    pub const fn new(high_contrast: bool) -> Self {
        if high_contrast {
            Self::HIGH_CONTRAST
        } else {
            Self::STANDARD
        }
    }

    /// RGB for `color`, `None` for `NoColor`
    #[must_use]
    pub const fn rgb(&self, color: FeedbackColor) -> Option<(u8, u8, u8)> {
        match color {
            FeedbackColor::Correct => Some(self.correct),
            FeedbackColor::WrongSpot => Some(self.wrong_spot),
            FeedbackColor::NotInWord => Some(self.not_in_word),
            FeedbackColor::NoColor => None,
        }
    }

    /// Paint `text` as a tile of `color` for the terminal
    #[must_use]
    pub fn paint(&self, text: &str, color: FeedbackColor) -> ColoredString {
        match self.rgb(color) {
            Some((r, g, b)) => text.bold().white().on_truecolor(r, g, b),
            None => text.normal(),
        }
    }

    /// `color` as a ratatui color; `NoColor` becomes `Color::Reset`
    #[must_use]
    pub const fn tui_color(&self, color: FeedbackColor) -> Color {
        match self.rgb(color) {
            Some((r, g, b)) => Color::Rgb(r, g, b),
            None => Color::Reset,
        }
    }
}
