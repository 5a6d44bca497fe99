//! Error types for the Lexinet library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexinetError`] enum. Adjacency tests and network expansion are total once
//! they are given a non-empty origin, so in practice errors come from reading
//! the dictionary or from the CLI layer.
//!
//! # Examples
//!
//! ```
//! use lexinet::error::{LexinetError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexinetError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lexinet operations.
#[derive(Error, Debug)]
pub enum LexinetError {
    /// I/O errors while reading a dictionary or writing results
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The origin word was empty
    #[error("Empty origin word supplied")]
    EmptyOrigin,

    /// A dictionary line that could not be turned into a word
    #[error("Malformed dictionary entry on line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    /// Worker pool construction errors
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexinetError.
pub type Result<T> = std::result::Result<T, LexinetError>;

impl LexinetError {
    /// Create a new malformed entry error.
    pub fn malformed_entry<S: Into<String>>(line: usize, reason: S) -> Self {
        LexinetError::MalformedEntry {
            line,
            reason: reason.into(),
        }
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        LexinetError::ThreadPool(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexinetError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexinetError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexinetError::malformed_entry(7, "invalid UTF-8");
        assert_eq!(
            error.to_string(),
            "Malformed dictionary entry on line 7: invalid UTF-8"
        );

        let error = LexinetError::invalid_argument("threads must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid argument: threads must be positive"
        );

        assert_eq!(
            LexinetError::EmptyOrigin.to_string(),
            "Empty origin word supplied"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexinet_error = LexinetError::from(io_error);

        match lexinet_error {
            LexinetError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
