//! Game session state machine

use crate::adversary::select_feedback;
use crate::core::{FeedbackPattern, Word};
use crate::error::EngineError;
use crate::keyboard::KeyboardState;
use crate::wordlists::Dictionary;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default number of guesses before the game is lost
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub high_contrast: bool,
    /// Seed for revealing a secret after a loss; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            high_contrast: false,
            seed: None,
        }
    }
}

/// Why a guess was refused
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    #[display("'{word}' is not in the word list")]
    NotInWordList { word: Word },

    #[display("the game is already over")]
    GameOver,

    #[display("{source}")]
    Engine { source: EngineError },
}

impl From<EngineError> for GameError {
    fn from(source: EngineError) -> Self {
        Self::Engine { source }
    }
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Continue { pattern: FeedbackPattern },
    Won { pattern: FeedbackPattern },
    /// Out of attempts; `secret` is the word the adversary settles on
    Lost {
        pattern: FeedbackPattern,
        secret: Word,
    },
}

impl GuessOutcome {
    /// The feedback the guess received
    #[must_use]
    pub const fn pattern(&self) -> &FeedbackPattern {
        match self {
            Self::Continue { pattern } | Self::Won { pattern } | Self::Lost { pattern, .. } => {
                pattern
            }
        }
    }
}

/// One played guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub pattern: FeedbackPattern,
    /// Candidates left after this guess
    pub remaining: usize,
}

/// One game against the adversary
#[derive(Debug, Clone)]
pub struct GameSession {
    candidates: Vec<Word>,
    keyboard: KeyboardState,
    history: Vec<Turn>,
    config: GameConfig,
    status: GameStatus,
    rng: StdRng,
}

impl GameSession {
    /// Start a game over `candidates`
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateSet` if `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use evil_wordle::core::Word;
    /// use evil_wordle::game::{GameConfig, GameSession, GuessOutcome};
    /// use evil_wordle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// let secrets = dictionary.secrets().to_vec();
    /// let mut game = GameSession::new(secrets, GameConfig::default()).unwrap();
    ///
    /// let outcome = game.submit_guess(&Word::new("crane").unwrap(), &dictionary).unwrap();
    /// assert!(matches!(outcome, GuessOutcome::Continue { .. }));
    /// assert_eq!(game.attempts_left(), 5);
    /// ```
    pub fn new(candidates: Vec<Word>, config: GameConfig) -> Result<Self, EngineError> {
        if candidates.is_empty() {
            return Err(EngineError::EmptyCandidateSet);
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            candidates,
            keyboard: KeyboardState::new(),
            history: Vec::with_capacity(config.max_attempts),
            config,
            status: GameStatus::InProgress,
            rng,
        })
    }

    /// Play `guess`
    ///
    /// The adversary answers with the least helpful truthful pattern and
    /// narrows its candidates to the words consistent with it.
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game is won or lost
    /// - `GameError::NotInWordList` if `dictionary` does not accept `guess`
    ///
    /// Refused guesses do not use up an attempt.
    pub fn submit_guess(
        &mut self,
        guess: &Word,
        dictionary: &Dictionary,
    ) -> Result<GuessOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !dictionary.is_valid_guess(guess) {
            return Err(GameError::NotInWordList {
                word: guess.clone(),
            });
        }

        let (pattern, remaining) = select_feedback(&self.candidates, guess)?;
        self.candidates = remaining;
        self.keyboard.apply_feedback(&pattern, guess);
        self.history.push(Turn {
            guess: guess.clone(),
            pattern,
            remaining: self.candidates.len(),
        });

        if pattern.is_perfect() {
            self.status = GameStatus::Won;
            return Ok(GuessOutcome::Won { pattern });
        }

        if self.history.len() >= self.config.max_attempts {
            self.status = GameStatus::Lost;
            // select_feedback never returns an empty family
            let secret = self
                .candidates
                .choose(&mut self.rng)
                .cloned()
                .ok_or(EngineError::EmptyCandidateSet)?;
            return Ok(GuessOutcome::Lost { pattern, secret });
        }

        Ok(GuessOutcome::Continue { pattern })
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.status.is_in_progress()
    }

    /// Words the adversary could still claim as the secret
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }
}
