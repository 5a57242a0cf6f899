//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{FeedbackColor, WORD_LENGTH};
use crate::output::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and sidebar
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_messages(f, app, side_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("😈 EVIL WORDLE")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

fn tile(letter: char, color: FeedbackColor, app: &App) -> Span<'static> {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match color {
        FeedbackColor::NoColor => Span::styled(text, Style::default().fg(Color::White)),
        _ => Span::styled(
            text,
            Style::default()
                .fg(Color::White)
                .bg(app.palette.tui_color(color))
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(app.config.max_attempts * 2);

    for turn in app.game.history() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, &color) in turn.guess.text().chars().zip(turn.pattern.colors()) {
            spans.push(tile(letter, color, app));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if !app.game.is_over() {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|i| {
                let letter = typed.get(i).copied().unwrap_or('_');
                [tile(letter, FeedbackColor::NoColor, app), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let empty_rows = if app.game.is_over() {
        app.game.attempts_left()
    } else {
        app.game.attempts_left().saturating_sub(1)
    };
    for _ in 0..empty_rows {
        lines.push(Line::from(Span::styled(
            " ·   ·   ·   ·   · ",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|&(indent, keys)| {
            let mut spans = vec![Span::raw(" ".repeat(indent))];
            for key in keys.chars() {
                let color = keyboard.color_of(key);
                let style = match color {
                    FeedbackColor::NoColor => Style::default(),
                    _ => Style::default()
                        .fg(Color::White)
                        .bg(app.palette.tui_color(color)),
                };
                spans.push(Span::styled(key.to_string(), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let widget =
        Paragraph::new(lines).block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type a guess | Enter to submit | Esc to quit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::GameOver => (
            " Game over | 'n' for new game, 'q' to quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let attempts_text = format!(
        "Guess {}/{}",
        (app.game.history().len() + 1).min(app.config.max_attempts),
        app.config.max_attempts
    );
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Won: {} | Streak: {}",
        app.stats.total_games, app.stats.games_won, app.stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let contrast = if app.config.high_contrast {
        "High contrast"
    } else {
        "Standard colors"
    };
    let help = Paragraph::new(contrast)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
