//! Minimal assertion vocabulary over invoked actions.
//!
//! [`ActionResultAssertions`] is implemented for every builder exposing
//! [`InvokedActionProvider`]. Each assertion consumes the builder and returns an
//! [`AndTestBuilder`] over the same context, or the failure as [`Error::Assertion`]. Other
//! vocabularies follow the same shape: an extension trait over `InvokedActionProvider` whose
//! methods finish with `AndTestBuilder::new(self.into_invoked_builder())`.

use std::fmt::Debug;

use axum::http::{header, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    builder::{AndTestBuilder, ContextCarrier, InvokedActionProvider},
    context::{ActionOutcome, ActionResponse, ResultKind},
    error::{assertion::AssertionError, Error},
};

/// Assertions on the outcome of an invoked action.
pub trait ActionResultAssertions: InvokedActionProvider {
    /// Asserts the action produced a response with status `expected`.
    fn should_return_status(self, expected: StatusCode) -> Result<AndTestBuilder, Error> {
        let actual = expect_response(&self)?.status();

        if actual != expected {
            return Err(fail(AssertionError::Status {
                action: self.invoked_action_name().to_string(),
                expected,
                actual,
            }));
        }

        Ok(pass(self, "status", expected.to_string()))
    }

    /// Asserts the action produced a response of kind `expected`.
    fn should_return_kind(self, expected: ResultKind) -> Result<AndTestBuilder, Error> {
        let actual = expect_response(&self)?.kind();

        if actual != expected {
            return Err(fail(AssertionError::Kind {
                action: self.invoked_action_name().to_string(),
                expected,
                actual,
            }));
        }

        Ok(pass(self, "kind", expected.to_string()))
    }

    /// Asserts the action redirected to `location`.
    fn should_redirect_to(self, location: &str) -> Result<AndTestBuilder, Error> {
        let response = expect_response(&self)?;
        let actual = response.header(header::LOCATION.as_str());

        if response.kind() != ResultKind::Redirect || actual != Some(location) {
            return Err(fail(AssertionError::Redirect {
                action: self.invoked_action_name().to_string(),
                expected: location.to_string(),
                actual: actual.map(str::to_string),
            }));
        }

        Ok(pass(self, "redirect", location.to_string()))
    }

    /// Asserts the response carries header `name` with value `expected`.
    ///
    /// A header set more than once (such as `set-cookie`) passes when any of its values matches.
    fn should_have_header(self, name: &str, expected: &str) -> Result<AndTestBuilder, Error> {
        let actual = expect_response(&self)?.header_values(name);

        if !actual.contains(&expected) {
            return Err(fail(AssertionError::Header {
                action: self.invoked_action_name().to_string(),
                name: name.to_string(),
                expected: expected.to_string(),
                actual: actual.into_iter().map(str::to_string).collect(),
            }));
        }

        Ok(pass(self, "header", format!("{}: {}", name, expected)))
    }

    /// Asserts the response body deserializes to a value equal to `expected`.
    fn should_return_json<T>(self, expected: &T) -> Result<AndTestBuilder, Error>
    where
        T: DeserializeOwned + PartialEq + Debug,
    {
        let actual = expect_response(&self)?.json::<T>().map_err(|e| {
            fail(AssertionError::JsonBody {
                action: self.invoked_action_name().to_string(),
                reason: e.to_string(),
            })
        })?;

        if &actual != expected {
            return Err(fail(AssertionError::JsonMismatch {
                action: self.invoked_action_name().to_string(),
                expected: format!("{:?}", expected),
                actual: format!("{:?}", actual),
            }));
        }

        Ok(pass(self, "json", format!("{:?}", expected)))
    }

    /// Asserts the action produced a response rather than an error.
    fn should_succeed(self) -> Result<AndTestBuilder, Error> {
        let status = expect_response(&self)?.status();

        Ok(pass(self, "succeed", status.to_string()))
    }

    /// Asserts the action returned an error whose message contains `fragment`.
    fn should_fail_with(self, fragment: &str) -> Result<AndTestBuilder, Error> {
        let err = match self.action_result() {
            ActionOutcome::Error(err) => err,
            ActionOutcome::Response(response) => {
                return Err(fail(AssertionError::UnexpectedResponse {
                    action: self.invoked_action_name().to_string(),
                    status: response.status(),
                }))
            }
        };

        if !err.message().contains(fragment) {
            return Err(fail(AssertionError::ErrorMessage {
                action: self.invoked_action_name().to_string(),
                expected: fragment.to_string(),
                actual: err.message().to_string(),
            }));
        }

        Ok(pass(self, "fail_with", fragment.to_string()))
    }
}

impl<B: InvokedActionProvider> ActionResultAssertions for B {}

fn expect_response<B: InvokedActionProvider>(builder: &B) -> Result<&ActionResponse, Error> {
    match builder.action_result() {
        ActionOutcome::Response(response) => Ok(response),
        ActionOutcome::Error(err) => Err(fail(AssertionError::UnexpectedError {
            action: builder.invoked_action_name().to_string(),
            message: err.message().to_string(),
        })),
    }
}

fn fail(err: AssertionError) -> Error {
    tracing::warn!(action = err.action(), "{}", err);

    Error::Assertion(err)
}

fn pass<B: InvokedActionProvider>(builder: B, assertion: &str, detail: String) -> AndTestBuilder {
    let mut builder = builder.into_invoked_builder();

    tracing::debug!(
        chain_id = %builder.context().chain_id(),
        action = builder.invoked_action_name(),
        assertion,
        detail = %detail,
        "assertion passed"
    );

    builder.record_assertion(assertion, detail);

    AndTestBuilder::new(builder)
}
