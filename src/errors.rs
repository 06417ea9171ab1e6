/*!
 * Error types for the rtlfix application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Error raised when no encoding tier could decode an input file.
///
/// This is the only hard per-file failure class. It never aborts a batch:
/// the controller records it as a per-file error and continues with the
/// remaining files.
#[derive(Error, Debug, Clone)]
#[error("unable to decode input bytes (attempted encodings: {})", .attempted.join(", "))]
pub struct DecodeError {
    /// Labels of the encoding tiers that were attempted, in order
    pub attempted: Vec<String>,
}

impl DecodeError {
    /// Create a decode error from the list of attempted tier labels
    pub fn new<I, S>(attempted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attempted: attempted.into_iter().map(Into::into).collect(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from decoding input bytes
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

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
