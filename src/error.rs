//! Error types for egui_color_notes

use thiserror::Error;

/// Result type alias for color conversions
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised while reading a hex color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not `#` followed by 3 or 6 hexadecimal digits
    #[error("Invalid hex color {input:?}: expected #RGB or #RRGGBB")]
    InvalidFormat { input: String },
}

impl ColorError {
    /// Create an invalid format error for the given input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }
}
