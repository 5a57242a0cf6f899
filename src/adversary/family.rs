//! Word families
//!
//! A family is every remaining candidate that would produce the same
//! feedback pattern against one guess. The adversary keeps exactly one
//! family per guess: the one that helps the guesser least.

use crate::core::{FeedbackPattern, Word};
use std::cmp::Ordering;
use std::fmt;

/// Candidates sharing one feedback pattern against a fixed guess
///
/// The constructor does not re-check that every word produces `pattern`;
/// the partitioning code upholds that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFamily {
    pattern: FeedbackPattern,
    words: Vec<Word>,
    difficulty: u32,
}

impl WordFamily {
    /// Create a family from its shared pattern and member words
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::adversary::WordFamily;
    /// use evil_wordle::core::{FeedbackColor::*, FeedbackPattern, Word};
    ///
    /// let family = WordFamily::new(
    ///     FeedbackPattern::new([NotInWord; 5]),
    ///     vec![Word::new("round").unwrap()],
    /// );
    /// assert_eq!(family.difficulty(), 10);
    /// ```
    #[must_use]
    pub fn new(pattern: FeedbackPattern, words: Vec<Word>) -> Self {
        Self {
            difficulty: pattern.difficulty(),
            pattern,
            words,
        }
    }

    /// Start a family from its first member
    #[must_use]
    pub(crate) fn seed(pattern: FeedbackPattern, word: Word) -> Self {
        Self::new(pattern, vec![word])
    }

    /// Append a member, keeping insertion order
    pub(crate) fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// The pattern every member produces
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &FeedbackPattern {
        &self.pattern
    }

    /// Members in the order they were partitioned
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the family has no members
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pattern difficulty: 0 per correct, 1 per wrong spot, 2 per absent letter
    ///
    /// Depends on the pattern only, never on the members.
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Split into pattern and members
    #[must_use]
    pub fn into_parts(self) -> (FeedbackPattern, Vec<Word>) {
        (self.pattern, self.words)
    }

    /// Adversarial order: the family worst for the guesser sorts first
    ///
    /// 1. More words first
    /// 2. Then higher difficulty first
    /// 3. Then patterns compared position by position, lower color first
    ///
    /// `Equal` means all three keys tie, which for families built from one
    /// guess only happens when the patterns are identical.
    #[must_use]
    pub fn adversarial_cmp(&self, other: &Self) -> Ordering {
        other
            .len()
            .cmp(&self.len())
            .then_with(|| other.difficulty.cmp(&self.difficulty))
            .then_with(|| self.pattern.colors().cmp(other.pattern.colors()))
    }

    /// Strict "sorts before" under [`adversarial_cmp`](Self::adversarial_cmp)
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.adversarial_cmp(other) == Ordering::Less
    }
}

impl fmt::Display for WordFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} difficulty {} ({} words)",
            self.pattern.to_emoji(),
            self.difficulty,
            self.words.len()
        )
    }
}
