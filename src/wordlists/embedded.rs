//! Embedded word lists
//!
//! Both lists are generated by `build.rs` from `data/`.

include!(concat!(env!("OUT_DIR"), "/secret_words.rs"));
include!(concat!(env!("OUT_DIR"), "/valid_guesses.rs"));
