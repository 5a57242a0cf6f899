//! Line-based game
//!
//! Reads one guess per line and prints the board after each one. Input and
//! output are generic so the loop can run against a terminal or in memory.

use crate::core::Word;
use crate::game::{GameConfig, GameError, GameSession, GameStatus, GuessOutcome};
use crate::output::{Palette, render_guess, render_keyboard};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Play one game, returning how it ended
///
/// Typing `quit` or closing the input ends the game early with
/// `GameStatus::InProgress`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// dictionary has no secret words.
pub fn run_play<R, W>(
    input: R,
    output: &mut W,
    dictionary: &Dictionary,
    config: GameConfig,
) -> Result<GameStatus>
where
    R: BufRead,
    W: Write,
{
    let palette = Palette::new(config.high_contrast);
    let mut game = GameSession::new(dictionary.secrets().to_vec(), config)?;

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                         Evil Wordle                          ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the 5-letter word in {} tries. The feedback is always truthful,",
        config.max_attempts
    )?;
    writeln!(output, "but the secret keeps changing to whatever helps you least.")?;
    writeln!(output, "Type 'quit' to give up.\n")?;

    let mut lines = input.lines();

    while !game.is_over() {
        write!(
            output,
            "Guess {}/{}: ",
            game.history().len() + 1,
            config.max_attempts
        )?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let entry = line.trim();

        if entry.is_empty() {
            continue;
        }
        if entry.eq_ignore_ascii_case("quit") {
            writeln!(output, "Giving up.")?;
            break;
        }

        let guess = match Word::new(entry) {
            Ok(word) => word,
            Err(err) => {
                writeln!(output, "{} {err}", "✗".red())?;
                continue;
            }
        };

        match game.submit_guess(&guess, dictionary) {
            Ok(outcome) => {
                print_board(output, &game, &palette)?;
                match outcome {
                    GuessOutcome::Continue { .. } => {}
                    GuessOutcome::Won { .. } => {
                        let used = game.history().len();
                        let plural = if used == 1 { "guess" } else { "guesses" };
                        writeln!(
                            output,
                            "\n{}",
                            format!("You won in {used} {plural}!").green().bold()
                        )?;
                    }
                    GuessOutcome::Lost { secret, .. } => {
                        writeln!(
                            output,
                            "\n{} The word was {}.",
                            "Out of guesses.".red().bold(),
                            secret.text().to_uppercase().bold()
                        )?;
                    }
                }
            }
            Err(err @ GameError::NotInWordList { .. }) => {
                writeln!(output, "{} {err}", "✗".red())?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(game.status())
}

fn print_board<W: Write>(output: &mut W, game: &GameSession, palette: &Palette) -> Result<()> {
    writeln!(output)?;
    for turn in game.history() {
        writeln!(output, "  {}", render_guess(&turn.guess, &turn.pattern, palette))?;
    }
    writeln!(output)?;
    for line in render_keyboard(game.keyboard(), palette).lines() {
        writeln!(output, "  {line}")?;
    }
    writeln!(output)?;
    Ok(())
}
