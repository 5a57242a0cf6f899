//! Family breakdown command
//!
//! Shows how one guess splits the candidates and which family the adversary
//! would keep.

use crate::adversary::{WordFamily, rank_families};
use crate::core::Word;
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};

/// Families for one guess, worst for the guesser first
#[derive(Debug, Clone)]
pub struct FamiliesReport {
    pub guess: Word,
    pub candidates: usize,
    pub families: Vec<WordFamily>,
}

/// Split the dictionary's secrets by their pattern against `guess`
///
/// # Errors
///
/// Returns an error if:
/// - `guess` is not a valid word
/// - `guess` is not an accepted guess
/// - the dictionary has no secrets
pub fn analyze_families(guess: &str, dictionary: &Dictionary) -> Result<FamiliesReport> {
    let guess = Word::new(guess).with_context(|| format!("Invalid word '{guess}'"))?;

    if !dictionary.is_valid_guess(&guess) {
        bail!("Word '{guess}' not in word list");
    }
    if dictionary.secrets().is_empty() {
        bail!("No secret words loaded");
    }

    Ok(FamiliesReport {
        families: rank_families(dictionary.secrets(), &guess),
        candidates: dictionary.secrets().len(),
        guess,
    })
}
