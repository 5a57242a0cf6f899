//! Opening guess ranking
//!
//! Plays every accepted guess as the first move and records how many
//! candidates the adversary gets to keep.

use crate::adversary::{OpenerScore, rank_openers};
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Ranked opening guesses
#[derive(Debug, Clone)]
pub struct OpenersReport {
    pub candidates: usize,
    /// Fewest survivors first
    pub scores: Vec<OpenerScore>,
    pub duration: Duration,
}

/// Score opening guesses against the dictionary's secrets
///
/// `limit` caps how many guesses (in alphabetical order) are scored.
///
/// # Errors
///
/// Returns an error if the dictionary has no secrets or if the progress bar
/// template is invalid.
pub fn rank_opening_guesses(
    dictionary: &Dictionary,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<OpenersReport> {
    let mut guesses = dictionary.guesses();
    if let Some(limit) = limit {
        guesses.truncate(limit);
    }

    let pb = if show_progress {
        let pb = ProgressBar::new(guesses.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb.set_message("scoring openers");
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let scores = rank_openers(&guesses, dictionary.secrets(), || pb.inc(1))?;
    pb.finish_and_clear();

    Ok(OpenersReport {
        candidates: dictionary.secrets().len(),
        scores,
        duration: start.elapsed(),
    })
}
