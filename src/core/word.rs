//! Word representation
//!
//! A `Word` is an immutable 5-letter lowercase word. Letters are stored as
//! ASCII bytes so coloring can index fixed-size per-letter tables.

use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Map an ASCII letter to its alphabet position (`a` = 0 ... `z` = 25)
///
/// Uppercase input is accepted and folded to lowercase.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Some((lower - b'a') as usize)
    } else {
        None
    }
}

/// A 5-letter word, normalized to lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    #[display("Word must be exactly 5 letters, got {len}")]
    InvalidLength { len: usize },
    #[display("Word must contain only ASCII letters")]
    NonAscii,
    #[display("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::core::Word;
    ///
    /// let word = Word::new("Llama").unwrap();
    /// assert_eq!(word.text(), "llama");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength { len: text.len() })?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Count of each letter, indexed by alphabet position
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &self.letters {
            counts[usize::from(letter - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(WordError::InvalidLength { len: 8 })
        );
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength { len: 4 }));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength { len: 0 }));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(2), b'a');
        assert_eq!(word.letter_at(4), b'e');
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("llama").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b'l').unwrap()], 2);
        assert_eq!(counts[letter_index(b'a').unwrap()], 2);
        assert_eq!(counts[letter_index(b'm').unwrap()], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'a'), Some(0));
        assert_eq!(letter_index(b'Z'), Some(25));
        assert_eq!(letter_index(b'0'), None);
        assert_eq!(letter_index(b'{'), None);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Ladle".parse().unwrap();
        assert_eq!(format!("{word}"), "ladle");
    }
}
