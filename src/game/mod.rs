//! A single game against the adversary
//!
//! The session owns everything one game needs: the candidates the adversary
//! can still claim, the keyboard, and the guess history.

mod session;

pub use session::{
    DEFAULT_MAX_ATTEMPTS, GameConfig, GameError, GameSession, GameStatus, GuessOutcome, Turn,
};
