//! Core domain types for Evil Wordle
//!
//! Words, feedback colors and the coloring rule itself. Everything here is
//! pure and free of I/O.

mod color;
mod pattern;
mod word;

pub use color::FeedbackColor;
pub use pattern::{FeedbackPattern, colors_for, try_colors_for};
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, letter_index};
