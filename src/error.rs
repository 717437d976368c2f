//! Error types for the gradient engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing or exporting a gradient
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No stop with the given id exists in the current list
    #[error("No color stop with id `{0}`")]
    NotFound(String),

    /// Export was requested while the stop list is empty
    #[error("Please generate a gradient first!")]
    EmptyState,

    /// Color literal is not `#` followed by six hex digits
    #[error("Invalid color `{0}`: expected #rrggbb")]
    InvalidColor(String),

    /// Stop position outside the 0-100 percent scale
    #[error("Invalid position {0}%: expected 0-100")]
    InvalidPosition(u32),

    /// Rotation outside the 0-360 degree range
    #[error("Invalid rotation {0}deg: expected 0-360")]
    InvalidRotation(u32),

    /// Gradient type name not in the supported set
    #[error("Unknown gradient type `{0}`")]
    UnknownGradientType(String),

    /// Stop literal could not be parsed (CLI `#hex:pos` form)
    #[error("Invalid stop `{0}`: expected #rrggbb:position")]
    InvalidStop(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl Error {
    /// True for errors the caller should treat as a benign no-op.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::EmptyState)
    }
}
