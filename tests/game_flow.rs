//! Full games played through the line-based loop with in-memory I/O.

use evil_wordle::commands::run_play;
use evil_wordle::core::Word;
use evil_wordle::game::{GameConfig, GameStatus};
use evil_wordle::wordlists::Dictionary;
use std::io::Cursor;

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(*w).unwrap()).collect()
}

fn play(dictionary: &Dictionary, config: GameConfig, script: &str) -> (GameStatus, String) {
    colored::control::set_override(false);
    let mut out = Vec::new();
    let status = run_play(Cursor::new(script), &mut out, dictionary, config).unwrap();
    (status, String::from_utf8(out).unwrap())
}

fn seeded(max_attempts: usize) -> GameConfig {
    GameConfig {
        max_attempts,
        seed: Some(42),
        ..GameConfig::default()
    }
}

#[test]
fn test_single_candidate_is_won_in_one() {
    let dictionary = Dictionary::new(words(&["bread"]), Vec::new());
    let (status, out) = play(&dictionary, seeded(6), "bread\n");

    assert_eq!(status, GameStatus::Won);
    assert!(out.contains(" B   R   E   A   D "));
    assert!(out.contains("You won in 1 guess!"));
}

#[test]
fn test_rejected_guesses_do_not_count() {
    let dictionary = Dictionary::new(words(&["bread"]), words(&["broad"]));
    let (status, out) = play(&dictionary, seeded(6), "xxxxx\nbre\n\nbread\n");

    assert_eq!(status, GameStatus::Won);
    assert!(out.contains("'xxxxx' is not in the word list"));
    assert!(out.contains("You won in 1 guess!"));
}

#[test]
fn test_adversary_dodges_then_is_cornered() {
    let dictionary = Dictionary::new(words(&["bread", "break", "bream"]), words(&["broad"]));
    let (status, out) = play(&dictionary, seeded(6), "broad\nbreak\nbream\n");

    // BROAD keeps BREAK and BREAM, BREAK then leaves only BREAM
    assert_eq!(status, GameStatus::Won);
    assert!(out.contains("Guess 3/6"));
    assert!(out.contains("You won in 3 guesses!"));
}

#[test]
fn test_loss_reveals_a_remaining_word() {
    let dictionary = Dictionary::new(words(&["bread", "break", "bream"]), words(&["zzzzz"]));
    let (status, out) = play(&dictionary, seeded(2), "zzzzz\nzzzzz\nbread\n");

    assert_eq!(status, GameStatus::Lost);
    assert!(out.contains("Out of guesses."));
    assert!(["BREAD", "BREAK", "BREAM"]
        .iter()
        .any(|w| out.contains(&format!("The word was {w}."))));
    assert!(!out.contains("Guess 3/2"));
}

#[test]
fn test_seeded_loss_is_reproducible() {
    let dictionary = Dictionary::new(words(&["bread", "break", "bream"]), words(&["zzzzz"]));
    let (_, first) = play(&dictionary, seeded(1), "zzzzz\n");
    let (_, second) = play(&dictionary, seeded(1), "zzzzz\n");
    assert_eq!(first, second);
}

#[test]
fn test_keyboard_shown_after_each_guess() {
    let dictionary = Dictionary::new(words(&["bread", "break", "bream"]), words(&["broad"]));
    let (_, out) = play(&dictionary, seeded(6), "broad\n");

    // No colors: used keys render as plain letters too
    assert!(out.contains("  q w e r t y u i o p"));
    assert!(out.contains("     z x c v b n m"));
}

#[test]
fn test_embedded_dictionary_first_guess_survives() {
    let dictionary = Dictionary::embedded();
    let (status, out) = play(&dictionary, seeded(6), "crane\n");

    assert_eq!(status, GameStatus::InProgress);
    assert!(out.contains(" C   R   A   N   E "));
    assert!(out.contains("Guess 2/6"));
}
