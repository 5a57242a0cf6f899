//! Evil Wordle
//!
//! A Wordle variant where the secret word is never fixed. After each guess
//! the adversary partitions the words it could still claim by the feedback
//! they would produce, and keeps the family that helps the guesser least.
//! Every pattern it reports is truthful for at least one remaining word.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_wordle::adversary::select_feedback;
//! use evil_wordle::core::Word;
//!
//! let candidates: Vec<Word> = ["bread", "break", "bream"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let guess = Word::new("broad").unwrap();
//!
//! let (pattern, remaining) = select_feedback(&candidates, &guess).unwrap();
//! println!("{} ({} words left)", pattern.to_emoji(), remaining.len());
//! ```

// Core domain types
pub mod core;

// Engine errors
pub mod error;

// Family partitioning and adversarial selection
pub mod adversary;

// Per-letter keyboard colors
pub mod keyboard;

// Game session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
