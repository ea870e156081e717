//! Error handling for DragDrop
//!
//! Provides the error types for the diagram core:
//! - Diagram errors (invalid geometry, broken line references)
//! - Configuration errors (reading, parsing, validating editor settings)
//!
//! A miss during hit-testing is never an error; it is modelled as `None`.
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;
use uuid::Uuid;

/// Diagram error type
///
/// Represents violations of the diagram model's preconditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagramError {
    /// Hit-testing box size must be strictly positive and finite
    #[error("Invalid box size {size}: must be a finite value greater than zero")]
    InvalidBoxSize {
        /// The rejected box size.
        size: f64,
    },

    /// Shape layout constants do not fit together
    #[error("Invalid shape layout: {reason}")]
    InvalidLayout {
        /// Why the layout was rejected.
        reason: String,
    },

    /// A line references a shape that does not exist
    #[error("Line {line} references missing shape {shape}")]
    DanglingLine {
        /// The offending line.
        line: Uuid,
        /// The shape id that failed to resolve.
        shape: Uuid,
    },
}

/// Configuration error type
///
/// Represents errors while loading, saving, or validating editor settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file extension does not name a supported format
    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat {
        /// The extension that was not recognised.
        extension: String,
    },

    /// The file contents could not be parsed or serialized
    #[error("Invalid {format} config: {reason}")]
    Parse {
        /// Format name, `json` or `toml`.
        format: &'static str,
        /// Parser message.
        reason: String,
    },

    /// A setting is out of range
    #[error("Invalid setting {setting}: {reason}")]
    Invalid {
        /// Dotted setting path, for example `layout.shape_size`.
        setting: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Main error type for DragDrop
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Diagram error
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a diagram error
    pub fn is_diagram_error(&self) -> bool {
        matches!(self, Error::Diagram(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
