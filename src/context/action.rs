//! The invoked action and what it produced.

use std::{borrow::Cow, collections::BTreeMap, fmt};

use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode},
};
use serde::de::DeserializeOwned;

/// Classification of a captured response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// A 3xx response carrying a `Location` header.
    Redirect,
    /// A response with an `application/json` content type.
    Json,
    /// A rendered page (`text/html`).
    View,
    /// Any other `text/*` response.
    Text,
    /// A response without a body.
    Empty,
    /// Anything not covered above.
    Other,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Redirect => "redirect",
            Self::Json => "JSON",
            Self::View => "view",
            Self::Text => "text",
            Self::Empty => "empty",
            Self::Other => "other",
        };

        f.write_str(name)
    }
}

/// Response produced by an invoked action, with its body fully collected.
#[derive(Debug, Clone)]
pub struct ActionResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ActionResponse {
    /// Wraps a response whose body has already been collected.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// All response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// First value of header `name`, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Every value of header `name` in the order it was set, skipping values that are not valid
    /// UTF-8.
    ///
    /// # Arguments
    /// - `name` - Header name, matched case-insensitively
    ///
    /// # Returns
    /// - `Vec<&str>` - Empty when the header is absent
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect()
    }

    /// Raw body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Classifies the response by status, `Location` and `Content-Type`.
    pub fn kind(&self) -> ResultKind {
        if self.status.is_redirection() && self.headers.contains_key(header::LOCATION) {
            return ResultKind::Redirect;
        }

        let content_type = self
            .header(header::CONTENT_TYPE.as_str())
            .map(|value| value.split(';').next().unwrap_or(value).trim().to_ascii_lowercase());

        match content_type.as_deref() {
            Some("application/json") => ResultKind::Json,
            Some("text/html") => ResultKind::View,
            Some(mime) if mime.starts_with("text/") => ResultKind::Text,
            _ if self.body.is_empty() => ResultKind::Empty,
            _ => ResultKind::Other,
        }
    }
}

/// Error returned by a fallible action instead of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionError {
    message: String,
    debug: String,
}

impl ActionError {
    /// Captures the `Display` and `Debug` renderings of `err`.
    pub fn capture<E: fmt::Display + fmt::Debug>(err: &E) -> Self {
        Self {
            message: err.to_string(),
            debug: format!("{:?}", err),
        }
    }

    /// `Display` rendering of the error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `Debug` rendering of the error.
    pub fn debug(&self) -> &str {
        &self.debug
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What an invoked action produced.
#[derive(Debug, Clone)]
pub enum ActionOutcome {
    /// The action rendered a response.
    Response(ActionResponse),
    /// The action returned an error instead.
    Error(ActionError),
}

impl ActionOutcome {
    /// The response, unless the action failed.
    pub fn response(&self) -> Option<&ActionResponse> {
        match self {
            Self::Response(response) => Some(response),
            Self::Error(_) => None,
        }
    }

    /// The error, if the action failed.
    pub fn error(&self) -> Option<&ActionError> {
        match self {
            Self::Response(_) => None,
            Self::Error(err) => Some(err),
        }
    }
}

/// An action that has been invoked on the controller, with its arguments and outcome.
#[derive(Debug, Clone)]
pub struct InvokedAction {
    name: String,
    arguments: BTreeMap<String, serde_json::Value>,
    outcome: ActionOutcome,
}

impl InvokedAction {
    /// Records an invocation of action `name`.
    ///
    /// # Arguments
    /// - `name` - Name the action is reported under in assertion failures
    /// - `arguments` - Serialized arguments, keyed by parameter name
    /// - `outcome` - Response or error the action produced
    pub fn new(
        name: impl Into<String>,
        arguments: BTreeMap<String, serde_json::Value>,
        outcome: ActionOutcome,
    ) -> Self {
        Self {
            name: name.into(),
            arguments,
            outcome,
        }
    }

    /// Name of the action.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded arguments by name.
    pub fn arguments(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.arguments
    }

    /// Argument recorded under `name`.
    pub fn argument(&self, name: &str) -> Option<&serde_json::Value> {
        self.arguments.get(name)
    }

    /// What the action produced.
    pub fn outcome(&self) -> &ActionOutcome {
        &self.outcome
    }
}
