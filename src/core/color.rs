//! Feedback colors
//!
//! The four values a tile or keyboard key can show, in a fixed total order:
//! `Correct < WrongSpot < NotInWord < NoColor`. The order doubles as the
//! priority order for the keyboard (lower is more informative) and as the
//! element order when two patterns are compared lexicographically.

use std::fmt;

/// Color shown for one letter of feedback, or for one keyboard key
///
/// `NoColor` is the keyboard's "not yet seen" state and never appears in a
/// pattern produced by [`colors_for`](super::colors_for).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum FeedbackColor {
    /// Right letter, right position
    Correct = 0,
    /// Letter is in the word, but elsewhere
    WrongSpot = 1,
    /// Letter is not in the word (or all its copies are already accounted for)
    NotInWord = 2,
    /// Keyboard only: letter not guessed yet
    #[default]
    NoColor = 3,
}

impl FeedbackColor {
    /// The three colors a feedback pattern can contain, in order
    pub const FEEDBACK: [Self; 3] = [Self::Correct, Self::WrongSpot, Self::NotInWord];

    /// Position of this color in the total order (0-3)
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Contribution of this color to a family's difficulty
    ///
    /// `Correct` weighs 0, `WrongSpot` 1 and `NotInWord` 2. `NoColor` never
    /// shows up in a pattern and contributes nothing.
    #[inline]
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Correct | Self::NoColor => 0,
            Self::WrongSpot => 1,
            Self::NotInWord => 2,
        }
    }

    /// Whether `self` carries strictly more information than `other`
    #[inline]
    #[must_use]
    pub const fn outranks(self, other: Self) -> bool {
        self.ordinal() < other.ordinal()
    }

    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongSpot => '🟨',
            Self::NotInWord => '⬜',
            Self::NoColor => '·',
        }
    }
}

impl fmt::Display for FeedbackColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::WrongSpot => "wrong spot",
            Self::NotInWord => "not in word",
            Self::NoColor => "unused",
        };
        f.write_str(name)
    }
}
