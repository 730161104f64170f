//! Error types for assertion chains.
//!
//! The chaining mechanism itself only ever produces [`Error::InvalidState`]. Assertion failures
//! come from the assertion vocabulary and travel through builders unchanged; the remaining
//! variants surface problems of the invocation harness (configuration, argument serialization,
//! response body collection). Every variant uses `thiserror` so `?` converts underlying errors
//! automatically.

pub mod assertion;
pub mod config;

use thiserror::Error;

use crate::error::{assertion::AssertionError, config::ConfigError};

/// Main error type for assertion chains.
#[derive(Error, Debug)]
pub enum Error {
    /// A builder was constructed without the state it requires.
    ///
    /// Raised when a builder receives no test context at all, or when a builder that reads
    /// invoked-action data receives a context in which no action has been invoked yet.
    #[error("Invalid builder state: {0}")]
    InvalidState(String),
    /// An assertion did not hold.
    #[error(transparent)]
    Assertion(#[from] AssertionError),
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An action argument could not be serialized for recording.
    #[error("Failed to record action argument: {0}")]
    Argument(#[from] serde_json::Error),
    /// The response body produced by an action could not be collected.
    #[error("Failed to collect response body: {0}")]
    ResponseBody(#[from] axum::Error),
}

impl Error {
    /// Returns the assertion failure carried by this error, if any.
    pub fn as_assertion(&self) -> Option<&AssertionError> {
        match self {
            Self::Assertion(err) => Some(err),
            _ => None,
        }
    }

    /// Whether this error was raised while constructing a builder.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}
