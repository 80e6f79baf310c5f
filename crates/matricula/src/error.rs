//! Error types for matricula.
//!
//! This module defines all error types used throughout the crate. Most of
//! them describe operator mistakes that the shell reports and moves past;
//! only configuration and I/O failures end the program.

use thiserror::Error;

/// The main error type for matricula operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record errors ===
    /// No record carries the requested identifier.
    #[error("no student with id {id}")]
    StudentNotFound {
        /// The identifier that matched nothing.
        id: u64,
    },

    // === Operator input errors ===
    /// The identifier text did not parse as an integer.
    #[error("'{input}' is not a valid student id")]
    InvalidId {
        /// The text the operator typed.
        input: String,
    },

    /// The menu selection was not one of the recognized choices.
    #[error("invalid option '{input}', expected 1-5")]
    InvalidSelection {
        /// The text the operator typed.
        input: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Console I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for matricula operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for the given identifier.
    #[must_use]
    pub fn not_found(id: u64) -> Self {
        Self::StudentNotFound { id }
    }

    /// Create an invalid-id error from the operator's input.
    #[must_use]
    pub fn invalid_id(input: impl Into<String>) -> Self {
        Self::InvalidId {
            input: input.into(),
        }
    }

    /// Create an invalid-selection error from the operator's input.
    #[must_use]
    pub fn invalid_selection(input: impl Into<String>) -> Self {
        Self::InvalidSelection {
            input: input.into(),
        }
    }

    /// Check if this error is the not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StudentNotFound { .. })
    }

    /// Check if this error is a reportable operator mistake rather than a
    /// failure of the program itself.
    #[must_use]
    pub fn is_operator_error(&self) -> bool {
        matches!(
            self,
            Self::StudentNotFound { .. } | Self::InvalidId { .. } | Self::InvalidSelection { .. }
        )
    }
}
