//! Terminal output
//!
//! Palettes, tile and keyboard rendering, and the report printers used by
//! the CLI commands.

pub mod display;
pub mod formatters;
pub mod palette;

pub use display::{print_families_report, print_openers_report, render_guess, render_keyboard};
pub use formatters::{KEYBOARD_ROWS, render_keyboard_with};
pub use palette::Palette;
