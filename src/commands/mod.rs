//! Command implementations

pub mod families;
pub mod openers;
pub mod play;

pub use families::{FamiliesReport, analyze_families};
pub use openers::{OpenersReport, rank_opening_guesses};
pub use play::run_play;
