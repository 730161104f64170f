//! Assertion failures.

use axum::http::StatusCode;
use thiserror::Error;

use crate::context::ResultKind;

/// Failure raised by the assertion vocabulary.
///
/// Every variant names the action under test so a failing chain points straight at the
/// invocation it was asserting on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionError {
    /// The response status differs from the expected one.
    #[error("Expected action {action:?} to return status {expected}, but it returned {actual}")]
    Status {
        /// Name of the invoked action.
        action: String,
        /// Status the assertion expected.
        expected: StatusCode,
        /// Status the action returned.
        actual: StatusCode,
    },
    /// The response was classified as a different kind of result.
    #[error("Expected action {action:?} to return a {expected} result, but it returned a {actual} result")]
    Kind {
        /// Name of the invoked action.
        action: String,
        /// Kind the assertion expected.
        expected: ResultKind,
        /// Kind of the captured response.
        actual: ResultKind,
    },
    /// A response header is missing or holds a different value.
    #[error("Expected action {action:?} to return header {name:?} with value {expected:?}, but found {actual:?}")]
    Header {
        /// Name of the invoked action.
        action: String,
        /// Header name as asserted.
        name: String,
        /// Value the assertion expected.
        expected: String,
        /// Every value the response carried for the header, empty when absent.
        actual: Vec<String>,
    },
    /// The response was not a redirect to the expected location.
    #[error("Expected action {action:?} to redirect to {expected:?}, but found {actual:?}")]
    Redirect {
        /// Name of the invoked action.
        action: String,
        /// Location the assertion expected.
        expected: String,
        /// `Location` header of the response, if any.
        actual: Option<String>,
    },
    /// The JSON body could not be deserialized into the expected type.
    #[error("Expected action {action:?} to return a JSON body, but it could not be read: {reason}")]
    JsonBody {
        /// Name of the invoked action.
        action: String,
        /// Why deserialization failed.
        reason: String,
    },
    /// The JSON body deserialized but differs from the expected value.
    #[error("Expected action {action:?} to return JSON {expected}, but it returned {actual}")]
    JsonMismatch {
        /// Name of the invoked action.
        action: String,
        /// `Debug` rendering of the expected value.
        expected: String,
        /// `Debug` rendering of the deserialized body.
        actual: String,
    },
    /// The action returned an error where a response was expected.
    #[error("Expected action {action:?} to produce a response, but it returned an error: {message}")]
    UnexpectedError {
        /// Name of the invoked action.
        action: String,
        /// Message of the returned error.
        message: String,
    },
    /// The action produced a response where an error was expected.
    #[error("Expected action {action:?} to return an error, but it produced a {status} response")]
    UnexpectedResponse {
        /// Name of the invoked action.
        action: String,
        /// Status of the produced response.
        status: StatusCode,
    },
    /// The action returned an error with a different message.
    #[error("Expected action {action:?} to fail with a message containing {expected:?}, but it failed with {actual:?}")]
    ErrorMessage {
        /// Name of the invoked action.
        action: String,
        /// Fragment the message should contain.
        expected: String,
        /// Message of the returned error.
        actual: String,
    },
}

impl AssertionError {
    /// Name of the action the failed assertion was made against.
    pub fn action(&self) -> &str {
        match self {
            Self::Status { action, .. }
            | Self::Kind { action, .. }
            | Self::Header { action, .. }
            | Self::Redirect { action, .. }
            | Self::JsonBody { action, .. }
            | Self::JsonMismatch { action, .. }
            | Self::UnexpectedError { action, .. }
            | Self::UnexpectedResponse { action, .. }
            | Self::ErrorMessage { action, .. } => action,
        }
    }
}
