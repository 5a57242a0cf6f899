//! Evil Wordle - CLI
//!
//! Play against an adversary that dodges your guesses, or inspect how it
//! chooses its feedback.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_wordle::{
    commands::{analyze_families, rank_opening_guesses, run_play},
    game::GameConfig,
    interactive::{App, run_tui},
    output::{Palette, print_families_report, print_openers_report},
    wordlists::Dictionary,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "evil_wordle",
    about = "Wordle against an adversary that keeps changing the secret word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Orange/blue tiles instead of green/yellow
    #[arg(long, global = true)]
    high_contrast: bool,

    /// Seed for the word revealed after a loss
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of guesses allowed
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value = "6",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    max_attempts: u16,

    /// Secret word list, one word per line (default: embedded list)
    #[arg(long, global = true)]
    secrets: Option<PathBuf>,

    /// Accepted guess list, one word per line (default: embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based game in the terminal (default)
    Play,

    /// Full-screen game
    Tui,

    /// Show how a guess splits the secret words into families
    Families {
        /// The guess to analyze
        guess: String,

        /// Number of families to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Rank opening guesses by how many words the adversary keeps
    Openers {
        /// Number of openers to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Only score the first L guesses (alphabetically)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = Dictionary::load(cli.secrets.as_deref(), cli.guesses.as_deref())
        .context("Failed to load word lists")?;

    let config = GameConfig {
        max_attempts: usize::from(cli.max_attempts),
        high_contrast: cli.high_contrast,
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, config),
        Commands::Tui => run_tui(App::new(&dictionary, config)?),
        Commands::Families { guess, top } => {
            let report = analyze_families(&guess, &dictionary)?;
            print_families_report(&report, top, &Palette::new(config.high_contrast));
            Ok(())
        }
        Commands::Openers { top, limit } => {
            println!(
                "Scoring openers against {} secret words...",
                dictionary.secrets().len()
            );
            let report = rank_opening_guesses(&dictionary, limit, true)?;
            print_openers_report(&report, top);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let status = run_play(stdin.lock(), &mut stdout, dictionary, config)?;
    if status.is_in_progress() {
        eprintln!("Game abandoned.");
    }
    Ok(())
}
