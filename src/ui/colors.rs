//! 24-bit RGB color theme for terminal output.

use owo_colors::Rgb;

/// Color palette for aiux's terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Success state color - green (34, 197, 94)
    pub success: Rgb,
    /// Error state color - red (239, 68, 68)
    pub error: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: Rgb(34, 197, 94),
            error: Rgb(239, 68, 68),
        }
    }
}
