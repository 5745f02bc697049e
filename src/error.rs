//! Error types for the Shuddhi library.
//!
//! All fallible operations return [`Result`], with [`ShuddhiError`] carrying
//! the failure detail. A dictionary that fails to load always surfaces as an
//! error; it is never silently replaced by an empty dictionary, because an
//! empty dictionary produces a very different (and misleading) correction
//! result.
//!
//! # Examples
//!
//! ```
//! use shuddhi::error::{ShuddhiError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShuddhiError::invalid_input("Input is not valid UTF-8"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Shuddhi operations.
#[derive(Error, Debug)]
pub enum ShuddhiError {
    /// I/O errors (file operations, invalid UTF-8 in a read, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors (missing corpus, unreadable corpus, etc.)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Input-related errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ShuddhiError.
pub type Result<T> = std::result::Result<T, ShuddhiError>;

impl ShuddhiError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        ShuddhiError::Dictionary(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        ShuddhiError::InvalidInput(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        ShuddhiError::InvalidOperation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ShuddhiError::Other(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ShuddhiError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ShuddhiError::Other(format!("Not found: {}", msg.into()))
    }
}
