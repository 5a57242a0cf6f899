//! Feedback pattern calculation and representation
//!
//! A pattern is the row of colors a guess receives against a secret word,
//! one [`FeedbackColor`] per letter position.

use super::word::{WORD_LENGTH, Word};
use super::FeedbackColor;
use crate::error::EngineError;
use std::fmt;

/// Feedback for one guess: one color per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern([FeedbackColor; WORD_LENGTH]);

impl FeedbackPattern {
    /// All correct (the guess is the secret)
    pub const PERFECT: Self = Self([FeedbackColor::Correct; WORD_LENGTH]);

    /// Create a pattern from explicit colors
    ///
    /// # Panics
    /// Panics in debug mode if any position is `NoColor`
    #[must_use]
    pub fn new(colors: [FeedbackColor; WORD_LENGTH]) -> Self {
        debug_assert!(
            !colors.contains(&FeedbackColor::NoColor),
            "NoColor cannot appear in a feedback pattern"
        );
        Self(colors)
    }

    /// The colors, position by position
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[FeedbackColor; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions showing `color`
    #[must_use]
    pub fn count(&self, color: FeedbackColor) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// Sum of per-color weights (`Correct` 0, `WrongSpot` 1, `NotInWord` 2)
    ///
    /// Ranges from 0 (all correct) to 10 (nothing in the word).
    #[must_use]
    pub fn difficulty(&self) -> u32 {
        self.0.iter().map(|c| c.weight()).sum()
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::core::FeedbackPattern;
    ///
    /// let p: FeedbackPattern = "GY-GY".parse().unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            let symbol = match color {
                FeedbackColor::Correct => 'G',
                FeedbackColor::WrongSpot => 'Y',
                FeedbackColor::NotInWord | FeedbackColor::NoColor => '-',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for wrong spot and
/// '-'/'_'/⬜ for not in word.
impl std::str::FromStr for FeedbackPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid pattern string: {s}"));
        }

        let mut colors = [FeedbackColor::NotInWord; WORD_LENGTH];
        for (slot, ch) in colors.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => FeedbackColor::Correct,
                'Y' | 'y' | '🟨' => FeedbackColor::WrongSpot,
                '-' | '_' | '⬜' => FeedbackColor::NotInWord,
                _ => return Err(format!("Invalid pattern string: {s}")),
            };
        }

        Ok(Self(colors))
    }
}

/// Color `guess` against `secret`, handling duplicate letters
///
/// # Algorithm
/// 1. Count the secret's letters into a fixed per-letter table
/// 2. First pass: mark exact matches correct and consume them from the table
/// 3. Second pass, left to right: a remaining letter with copies left in the
///    table is in the wrong spot (and consumes a copy), otherwise not in word
///
/// Exact matches are consumed before any wrong-spot check, so a letter used
/// by an exact match is never credited again elsewhere.
///
/// # Examples
/// ```
/// use evil_wordle::core::{FeedbackColor::*, FeedbackPattern, Word, colors_for};
///
/// let secret = Word::new("llama").unwrap();
/// let guess = Word::new("ladle").unwrap();
/// assert_eq!(
///     colors_for(&secret, &guess),
///     FeedbackPattern::new([Correct, WrongSpot, NotInWord, WrongSpot, NotInWord])
/// );
/// ```
#[must_use]
pub fn colors_for(secret: &Word, guess: &Word) -> FeedbackPattern {
    let mut colors = [FeedbackColor::NotInWord; WORD_LENGTH];
    let mut resolved = [false; WORD_LENGTH];
    let mut available = secret.letter_counts();

    // First pass: exact position matches
    for (i, (&s, &g)) in secret.letters().iter().zip(guess.letters()).enumerate() {
        if s == g {
            colors[i] = FeedbackColor::Correct;
            resolved[i] = true;
            available[usize::from(g - b'a')] -= 1;
        }
    }

    // Second pass: present elsewhere, limited by the remaining copies
    for (i, &g) in guess.letters().iter().enumerate() {
        if resolved[i] {
            continue;
        }
        let count = &mut available[usize::from(g - b'a')];
        if *count > 0 {
            colors[i] = FeedbackColor::WrongSpot;
            *count -= 1;
        }
    }

    FeedbackPattern(colors)
}

/// Color raw text, validating it first
///
/// # Errors
/// - `EngineError::InvalidInput` if the two strings differ in length
/// - `EngineError::InvalidWord` if either side is not a valid word
pub fn try_colors_for(secret: &str, guess: &str) -> Result<FeedbackPattern, EngineError> {
    let secret_len = secret.chars().count();
    let guess_len = guess.chars().count();
    if secret_len != guess_len {
        return Err(EngineError::InvalidInput {
            secret_len,
            guess_len,
        });
    }

    let secret = Word::new(secret).map_err(|source| EngineError::InvalidWord { source })?;
    let guess = Word::new(guess).map_err(|source| EngineError::InvalidWord { source })?;
    Ok(colors_for(&secret, &guess))
}
