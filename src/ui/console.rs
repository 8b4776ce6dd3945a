//! User-facing output lines.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::ui::colors::Theme;

/// Writes completion and error lines for the command surface.
#[derive(Debug, Clone)]
pub struct Console {
    theme: Theme,
    /// Whether colors are enabled (respects NO_COLOR env var)
    colors_enabled: bool,
    /// Suppress completion lines. Errors are always printed.
    quiet: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console with colors auto-detected.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            colors_enabled: Self::detect_color_support(),
            quiet: false,
        }
    }

    /// Allow or forbid colors. Forbidding always wins over detection.
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.colors_enabled = self.colors_enabled && enabled;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors_enabled
    }

    /// Print a completion line to stdout unless quiet.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.format_success(message));
        }
    }

    /// Print an error line to stderr.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }

    pub fn format_success(&self, message: &str) -> String {
        if self.colors_enabled {
            message.color(self.theme.success).to_string()
        } else {
            message.to_string()
        }
    }

    pub fn format_error(&self, message: &str) -> String {
        if self.colors_enabled {
            format!("{} {}", "Error:".color(self.theme.error).bold(), message)
        } else {
            format!("Error: {}", message)
        }
    }

    fn detect_color_support() -> bool {
        std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
    }
}
