//! On-screen keyboard state
//!
//! Tracks the best color seen for each letter over a whole game. A key only
//! ever moves toward more information: unused, then not in word, then wrong
//! spot, then correct. It never moves back.

use crate::core::{ALPHABET_SIZE, FeedbackColor, FeedbackPattern, Word, letter_index};

/// Per-letter colors for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    colors: [FeedbackColor; ALPHABET_SIZE],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    /// Every key starts as `NoColor`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors: [FeedbackColor::NoColor; ALPHABET_SIZE],
        }
    }

    /// Record the feedback a guess received
    ///
    /// Each position upgrades its letter only if the new color outranks the
    /// stored one. Positions are applied left to right, so a letter repeated
    /// within the guess ends with the best color any of its positions got.
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::core::{FeedbackColor, FeedbackPattern, Word};
    /// use evil_wordle::keyboard::KeyboardState;
    ///
    /// let mut keyboard = KeyboardState::new();
    /// let pattern: FeedbackPattern = "-GY--".parse().unwrap();
    /// keyboard.apply_feedback(&pattern, &Word::new("teeth").unwrap());
    ///
    /// assert_eq!(keyboard.color_of('e'), FeedbackColor::Correct);
    /// assert_eq!(keyboard.color_of('t'), FeedbackColor::NotInWord);
    /// assert_eq!(keyboard.color_of('z'), FeedbackColor::NoColor);
    /// ```
    pub fn apply_feedback(&mut self, pattern: &FeedbackPattern, guess: &Word) {
        for (&color, &letter) in pattern.colors().iter().zip(guess.letters()) {
            if color == FeedbackColor::NoColor {
                continue;
            }
            let slot = &mut self.colors[usize::from(letter - b'a')];
            if color.outranks(*slot) {
                *slot = color;
            }
        }
    }

    /// Current color of `letter` (case-insensitive)
    ///
    /// Characters outside `a..=z` report `NoColor`.
    #[must_use]
    pub fn color_of(&self, letter: char) -> FeedbackColor {
        u8::try_from(letter)
            .ok()
            .and_then(letter_index)
            .map_or(FeedbackColor::NoColor, |i| self.colors[i])
    }

    /// The full mapping, alphabetically
    #[must_use]
    pub fn colors(&self) -> [(char, FeedbackColor); ALPHABET_SIZE] {
        std::array::from_fn(|i| (char::from(b'a' + i as u8), self.colors[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FeedbackColor::{Correct as C, NoColor, NotInWord as N, WrongSpot as W};

    fn apply(keyboard: &mut KeyboardState, colors: [FeedbackColor; 5], guess: &str) {
        keyboard.apply_feedback(&FeedbackPattern::new(colors), &Word::new(guess).unwrap());
    }

    fn assert_colors(keyboard: &KeyboardState, expected: &[(char, FeedbackColor)]) {
        for (letter, color) in keyboard.colors() {
            let want = expected
                .iter()
                .find(|(l, _)| *l == letter)
                .map_or(NoColor, |&(_, c)| c);
            assert_eq!(color, want, "key '{letter}'");
        }
    }

    #[test]
    fn starts_blank() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.colors().iter().all(|&(_, c)| c == NoColor));
    }

    #[test]
    fn single_correct_letter() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, [C, N, N, N, N], "apple");
        assert_colors(&keyboard, &[('a', C), ('p', N), ('l', N), ('e', N)]);
    }

    #[test]
    fn single_wrong_spot_letter() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, [N, N, N, N, W], "brick");
        assert_colors(&keyboard, &[('b', N), ('r', N), ('i', N), ('c', N), ('k', W)]);
    }

    #[test]
    fn wrong_spot_survives_later_absent_duplicate() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, [W, N, N, N, N], "adapt");
        assert_colors(&keyboard, &[('a', W), ('d', N), ('p', N), ('t', N)]);

        apply(&mut keyboard, [N, N, W, N, N], "track");
        assert_colors(
            &keyboard,
            &[('a', W), ('d', N), ('p', N), ('t', N), ('r', N), ('c', N), ('k', N)],
        );
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, [N, C, W, N, N], "teeth");
        apply(&mut keyboard, [N, C, W, N, N], "teeth");
        assert_colors(&keyboard, &[('t', N), ('e', C), ('h', N)]);
    }

    #[test]
    fn upgrades_across_guesses() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, [N, W, N, N, N], "basis");
        assert_eq!(keyboard.color_of('s'), N);
        assert_eq!(keyboard.color_of('a'), W);

        apply(&mut keyboard, [C, N, N, C, C], "swiss");
        assert_eq!(keyboard.color_of('s'), C);
        assert_eq!(keyboard.color_of('w'), N);
    }

    #[test]
    fn stone_then_straw() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, [C, W, N, N, N], "stone");
        apply(&mut keyboard, [C, W, N, W, N], "straw");
        assert_colors(
            &keyboard,
            &[('s', C), ('t', W), ('o', N), ('n', N), ('e', N), ('r', N), ('a', W), ('w', N)],
        );
    }

    #[test]
    fn color_of_is_case_insensitive_and_total() {
        let mut keyboard = KeyboardState::new();
        apply(&mut keyboard, [C, N, N, N, N], "apple");
        assert_eq!(keyboard.color_of('A'), C);
        assert_eq!(keyboard.color_of('?'), NoColor);
        assert_eq!(keyboard.color_of('é'), NoColor);
    }
}
