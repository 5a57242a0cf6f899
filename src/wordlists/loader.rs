//! Word list loading
//!
//! Turns embedded string slices or plain text files (one word per line) into
//! validated [`Word`]s.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Blank lines and entries that are not valid words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use evil_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/secret_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated text into words, skipping anything invalid
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert an embedded string slice to words
///
/// # Examples
/// ```
/// use evil_wordle::wordlists::loader::words_from_slice;
/// use evil_wordle::wordlists::SECRET_WORDS;
///
/// let words = words_from_slice(SECRET_WORDS);
/// assert_eq!(words.len(), SECRET_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
