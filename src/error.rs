//! Errors raised by the feedback engine

use crate::core::WordError;

/// Precondition violations of the core operations
///
/// Neither is recoverable inside the engine; both are surfaced to the caller
/// as soon as they are detected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// Secret and guess do not have the same length
    #[display("secret has {secret_len} letters but guess has {guess_len}")]
    InvalidInput { secret_len: usize, guess_len: usize },

    /// Raw text could not be turned into a word
    #[display("invalid word: {source}")]
    InvalidWord { source: WordError },

    /// The selector was handed no candidates
    #[display("no candidate words to choose feedback from")]
    EmptyCandidateSet,
}
