//! Terminal output for aiux.
//!
//! Completion lines go to stdout, errors to stderr. Color is used only
//! when stdout is a terminal and neither `--no-color` nor `NO_COLOR` is set.

mod colors;
mod console;

pub use colors::Theme;
pub use console::Console;
