/*!
 * Error types for the chat2ass application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while validating configuration or ban rules.
///
/// All of these are fatal: the run stops before any output is written.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A time bound is not in `h:m:s` form
    #[error("Invalid time '{0}': the format must be 'h:m:s'")]
    InvalidTimeFormat(String),

    /// A time bound has a negative or oversized component
    #[error("Invalid time '{value}': {reason}")]
    TimeComponentOutOfRange {
        /// The raw value as entered
        value: String,
        /// Which rule was broken
        reason: String,
    },

    /// Start bound lies after a nonzero end bound
    #[error("Start time {start}s is greater than end time {end}s. Change one of them.")]
    StartAfterEnd {
        start: u64,
        end: u64,
    },

    /// Start and end bounds are the same nonzero value
    #[error("Start time {0}s and end time {0}s are the same. Change one of them.")]
    EmptyTimeRange(u64),

    /// A canvas or timing dimension is zero
    #[error("Invalid {name}: {value} (must be 1 or greater)")]
    InvalidDimension {
        name: &'static str,
        value: u32,
    },

    /// Ban rule source lacks one of the four lists
    #[error("Ban rule source missing required field: {0}")]
    BanRuleMissingField(String),

    /// Ban rule field exists but is not a list of strings
    #[error("Ban rule field '{0}' must be a list of strings")]
    BanRuleFieldNotList(String),

    /// Ban rule file could not be read or parsed
    #[error("Failed to load ban rules from {path}: {message}")]
    BanRuleSource {
        path: String,
        message: String,
    },
}

/// Errors that can occur when loading a chat export
#[derive(Error, Debug)]
pub enum ChatError {
    /// The chat file does not exist
    #[error("File {0} not found. Confirm the file name.")]
    NotFound(String),

    /// The chat file is not the expected JSON document
    #[error("The {path} is not a valid chat json file: {message}")]
    InvalidJson {
        path: String,
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration or ban rule validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from loading a chat export
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
