//! TUI application state and logic

use crate::core::Word;
use crate::error::EngineError;
use crate::game::{GameConfig, GameError, GameSession, GuessOutcome};
use crate::output::Palette;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub palette: Palette,
    pub game: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
}

impl<'a> App<'a> {
    /// # Errors
    ///
    /// Returns `EngineError::EmptyCandidateSet` if the dictionary has no
    /// secret words.
    pub fn new(dictionary: &'a Dictionary, config: GameConfig) -> Result<Self, EngineError> {
        let game = GameSession::new(dictionary.secrets().to_vec(), config)?;

        let mut app = Self {
            dictionary,
            config,
            palette: Palette::new(config.high_contrast),
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the word in {} tries. I will not make it easy.",
                config.max_attempts
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Process one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < 5 {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = match Word::new(self.input_buffer.as_str()) {
            Ok(word) => word,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.game.submit_guess(&guess, self.dictionary) {
            Ok(outcome) => {
                self.input_buffer.clear();
                self.record_outcome(&outcome);
            }
            Err(GameError::NotInWordList { word }) => {
                self.add_message(
                    &format!("'{}' is not in the word list", word.text().to_uppercase()),
                    MessageStyle::Error,
                );
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn record_outcome(&mut self, outcome: &GuessOutcome) {
        match outcome {
            GuessOutcome::Continue { .. } => {
                let left = self.game.attempts_left();
                let plural = if left == 1 { "guess" } else { "guesses" };
                self.add_message(&format!("{left} {plural} left"), MessageStyle::Info);
            }
            GuessOutcome::Won { .. } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.current_streak += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("🎉 Cornered it in {} guesses!", self.game.history().len()),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GuessOutcome::Lost { secret, .. } => {
                self.stats.total_games += 1;
                self.stats.current_streak = 0;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("The word was {}.", secret.text().to_uppercase()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        // Each game in a seeded run gets its own seed
        let config = GameConfig {
            seed: self
                .config
                .seed
                .map(|seed| seed.wrapping_add(self.stats.total_games as u64)),
            ..self.config
        };

        match GameSession::new(self.dictionary.secrets().to_vec(), config) {
            Ok(game) => {
                self.game = game;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// The terminal is restored before any error from the event loop is returned.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, event::read);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, F>(terminal: &mut Terminal<B>, mut app: App, mut next_event: F) -> Result<()>
where
    B: ratatui::backend::Backend,
    F: FnMut() -> io::Result<Event>,
{
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            app.handle_key(key);
        }
    }

    Ok(())
}
