//! Colored terminal rendering

use super::formatters::{create_progress_bar, render_keyboard_with};
use super::palette::Palette;
use crate::commands::{FamiliesReport, OpenersReport};
use crate::core::{FeedbackPattern, Word};
use crate::keyboard::KeyboardState;
use colored::Colorize;

/// One guess as a row of colored tiles, e.g. ` B  R  O  A  D `
#[must_use]
pub fn render_guess(guess: &Word, pattern: &FeedbackPattern, palette: &Palette) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.colors())
        .map(|(letter, &color)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            palette.paint(&tile, color).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The keyboard with used keys painted
#[must_use]
pub fn render_keyboard(keyboard: &KeyboardState, palette: &Palette) -> String {
    render_keyboard_with(keyboard, |key, color| {
        palette.paint(&key.to_string(), color).to_string()
    })
}

/// Print every family a guess splits the candidates into
pub fn print_families_report(report: &FamiliesReport, limit: usize, palette: &Palette) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FAMILIES FOR:".bright_cyan().bold(),
        report.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} candidates split into {} families",
        report.candidates,
        report.families.len()
    );

    if let Some(kept) = report.families.first() {
        println!(
            "   Adversary keeps: {} ({} words, difficulty {})",
            render_guess(&report.guess, kept.pattern(), palette),
            kept.len(),
            kept.difficulty()
        );
    }
    println!();

    for (rank, family) in report.families.iter().take(limit).enumerate() {
        let bar = create_progress_bar(family.len(), report.candidates, 20);
        let sample: Vec<&str> = family.words().iter().take(6).map(Word::text).collect();
        let more = family.len().saturating_sub(sample.len());

        println!(
            "{:>3}. {}  [{}] {:>5} words  difficulty {:>2}",
            rank + 1,
            family.pattern().to_emoji(),
            bar.green(),
            family.len(),
            family.difficulty()
        );
        if more > 0 {
            println!("     {} (+{more} more)", sample.join(" ").dimmed());
        } else {
            println!("     {}", sample.join(" ").dimmed());
        }
    }

    let hidden = report.families.len().saturating_sub(limit);
    if hidden > 0 {
        println!("\n   ... and {hidden} smaller families");
    }
}

/// Print the best opening guesses against the adversary
pub fn print_openers_report(report: &OpenersReport, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING GUESSES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Scored {} guesses against {} candidates in {:.2}s",
        report.scores.len(),
        report.candidates,
        report.duration.as_secs_f64()
    );
    println!("   Fewer survivors is better: the adversary keeps its largest family.\n");

    for (rank, score) in report.scores.iter().take(top).enumerate() {
        let medal = match rank {
            0 => "🥇",
            1 => "🥈",
            2 => "🥉",
            _ => "  ",
        };
        println!(
            "{medal} {:>3}. {}  {}  {:>5} survivors  difficulty {:>2}",
            rank + 1,
            score.guess.text().to_uppercase().bright_yellow(),
            score.pattern.to_emoji(),
            score.survivors,
            score.difficulty
        );
    }

    if let Some(worst) = report.scores.last() {
        println!(
            "\n   Worst: {} leaves {} survivors",
            worst.guess.text().to_uppercase().red(),
            worst.survivors
        );
    }
}
