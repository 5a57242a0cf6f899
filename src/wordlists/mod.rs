//! Word lists for Evil Wordle
//!
//! The secret words the adversary may commit to and the wider list of
//! accepted guesses, embedded at build time or loaded from disk.

mod embedded;
pub mod loader;

pub use embedded::{SECRET_WORDS, SECRET_WORDS_COUNT, VALID_GUESSES, VALID_GUESSES_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// The word lists one game is played with
///
/// `secrets` seeds the adversary's candidate set; a guess is accepted if it
/// appears in either list.
#[derive(Debug, Clone)]
pub struct Dictionary {
    secrets: Vec<Word>,
    guesses: FxHashSet<Word>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}

impl Dictionary {
    /// Build from explicit lists
    ///
    /// Secrets are always accepted as guesses, whether or not `guesses`
    /// contains them.
    #[must_use]
    pub fn new(secrets: Vec<Word>, guesses: impl IntoIterator<Item = Word>) -> Self {
        let mut accepted: FxHashSet<Word> = guesses.into_iter().collect();
        accepted.extend(secrets.iter().cloned());
        Self {
            secrets,
            guesses: accepted,
        }
    }

    /// The lists compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::core::Word;
    /// use evil_wordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.is_valid_guess(&Word::new("crane").unwrap()));
    /// assert!(!dictionary.is_valid_guess(&Word::new("xxxxx").unwrap()));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(SECRET_WORDS),
            loader::words_from_slice(VALID_GUESSES),
        )
    }

    /// Load either list from disk, falling back to the embedded one
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a given file cannot be read.
    pub fn load(secrets: Option<&Path>, guesses: Option<&Path>) -> io::Result<Self> {
        let secrets = match secrets {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(SECRET_WORDS),
        };
        let guesses = match guesses {
            Some(path) => loader::load_from_file(path)?,
            None => loader::words_from_slice(VALID_GUESSES),
        };
        Ok(Self::new(secrets, guesses))
    }

    /// Candidate secrets, in file order
    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    /// Every accepted guess, sorted alphabetically
    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        let mut all: Vec<Word> = self.guesses.iter().cloned().collect();
        all.sort_unstable();
        all
    }

    /// Whether `word` may be played
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.guesses.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn counts_match_consts() {
        assert_eq!(SECRET_WORDS.len(), SECRET_WORDS_COUNT);
        assert_eq!(VALID_GUESSES.len(), VALID_GUESSES_COUNT);
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        for &w in SECRET_WORDS.iter().chain(VALID_GUESSES) {
            assert_eq!(w.len(), 5, "Word '{w}' is not 5 letters");
            assert!(
                w.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{w}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn secrets_subset_of_guesses() {
        let guesses: FxHashSet<&str> = VALID_GUESSES.iter().copied().collect();
        for &secret in SECRET_WORDS {
            assert!(guesses.contains(secret), "Secret '{secret}' not a valid guess");
        }
    }

    #[test]
    fn secrets_always_accepted() {
        let dictionary = Dictionary::new(vec![word("llama")], vec![word("ladle")]);
        assert!(dictionary.is_valid_guess(&word("llama")));
        assert!(dictionary.is_valid_guess(&word("ladle")));
        assert!(!dictionary.is_valid_guess(&word("crane")));
        assert_eq!(dictionary.guesses(), vec![word("ladle"), word("llama")]);
    }

    #[test]
    fn embedded_dictionary_shape() {
        let dictionary = Dictionary::embedded();
        assert_eq!(dictionary.secrets().len(), SECRET_WORDS_COUNT);
        assert_eq!(dictionary.guesses().len(), VALID_GUESSES_COUNT);
    }

    #[test]
    fn load_without_paths_is_embedded() {
        let loaded = Dictionary::load(None, None).unwrap();
        assert_eq!(loaded.secrets(), Dictionary::embedded().secrets());
    }
}
