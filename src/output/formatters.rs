//! Plain-text layout helpers

use crate::core::FeedbackColor;
use crate::keyboard::KeyboardState;

/// Keyboard rows with their left indent
pub const KEYBOARD_ROWS: [(usize, &str); 3] = [(0, "qwertyuiop"), (1, "asdfghjkl"), (3, "zxcvbnm")];

/// Lay out the keyboard, one line per row
///
/// Keys are separated by a single space. Unused keys are the bare letter;
/// every other key is passed to `painter` along with its color.
///
/// # Examples
/// ```
/// use evil_wordle::keyboard::KeyboardState;
/// use evil_wordle::output::render_keyboard_with;
///
/// let text = render_keyboard_with(&KeyboardState::new(), |key, _| key.to_string());
/// assert_eq!(text, "q w e r t y u i o p\n a s d f g h j k l\n   z x c v b n m");
/// ```
#[must_use]
pub fn render_keyboard_with<F>(keyboard: &KeyboardState, painter: F) -> String
where
    F: Fn(char, FeedbackColor) -> String,
{
    KEYBOARD_ROWS
        .iter()
        .map(|&(indent, keys)| {
            let row: Vec<String> = keys
                .chars()
                .map(|key| match keyboard.color_of(key) {
                    FeedbackColor::NoColor => key.to_string(),
                    color => painter(key, color),
                })
                .collect();
            format!("{}{}", " ".repeat(indent), row.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { (value * width / max).min(width) };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
