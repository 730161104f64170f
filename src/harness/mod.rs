//! Invocation harness.
//!
//! [`ControllerTest`] runs one action on a controller, collects what it produced into a fresh
//! [`TestContext`] and starts the assertion chain over it with [`begin_chain`].

use std::{any::Any, collections::BTreeMap, fmt, future::Future, sync::Arc};

use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::{
    builder::BaseTestBuilderWithInvokedAction,
    config::ChainConfig,
    context::{
        ActionError, ActionOutcome, ActionResponse, ControllerHandle, InvokedAction, TestContext,
    },
    error::Error,
};

/// Starts an assertion chain over a context in which an action has been invoked.
///
/// # Returns
/// - `Ok(BaseTestBuilderWithInvokedAction)` - First node of the chain, awaiting an assertion
/// - `Err(Error::InvalidState)` - The context records no invoked action
pub fn begin_chain(context: TestContext) -> Result<BaseTestBuilderWithInvokedAction, Error> {
    tracing::debug!(
        chain_id = %context.chain_id(),
        controller = %context.controller_type(),
        action = context.invoked_action().map(|action| action.name()).unwrap_or_default(),
        "beginning assertion chain"
    );

    BaseTestBuilderWithInvokedAction::try_from(context)
}

/// Simulates the invocation of a single controller action.
///
/// Every call to [`calling`](Self::calling) or [`calling_fallible`](Self::calling_fallible)
/// consumes the harness and produces an independent chain with its own context.
pub struct ControllerTest<C> {
    controller: Arc<C>,
    config: ChainConfig,
    arguments: BTreeMap<String, serde_json::Value>,
}

impl<C: Any + Send + Sync> ControllerTest<C> {
    /// Takes ownership of `controller` and tests it with the default [`ChainConfig`].
    pub fn new(controller: C) -> Self {
        Self::from_shared(Arc::new(controller))
    }

    /// Tests a controller that is also referenced elsewhere.
    pub fn from_shared(controller: Arc<C>) -> Self {
        Self {
            controller,
            config: ChainConfig::default(),
            arguments: BTreeMap::new(),
        }
    }

    /// Replaces the configuration applied to the chain.
    pub fn with_config(mut self, config: ChainConfig) -> Self {
        self.config = config;
        self
    }

    /// Records an argument passed to the action so assertions can inspect it later.
    ///
    /// # Returns
    /// - `Ok(Self)` - The harness for method chaining
    /// - `Err(Error::Argument)` - `value` could not be serialized
    pub fn with_argument<T: Serialize>(
        mut self,
        name: impl Into<String>,
        value: T,
    ) -> Result<Self, Error> {
        self.arguments.insert(name.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// The controller actions will be invoked on.
    pub fn controller(&self) -> &Arc<C> {
        &self.controller
    }

    /// Invokes `action` and renders whatever it returns into a response.
    ///
    /// Results whose error type implements `IntoResponse` are rendered too, exactly as axum
    /// would; use [`calling_fallible`](Self::calling_fallible) to capture the error instead.
    ///
    /// # Returns
    /// - `Ok(BaseTestBuilderWithInvokedAction)` - Chain over the captured response
    /// - `Err(Error::ResponseBody)` - The body could not be collected within the body limit
    pub async fn calling<F, Fut, R>(
        self,
        action: &str,
        invoke: F,
    ) -> Result<BaseTestBuilderWithInvokedAction, Error>
    where
        F: FnOnce(Arc<C>) -> Fut,
        Fut: Future<Output = R>,
        R: IntoResponse,
    {
        tracing::debug!(
            controller = %std::any::type_name::<C>(),
            action,
            "invoking action"
        );

        let response = invoke(self.controller.clone()).await.into_response();
        let outcome = ActionOutcome::Response(capture_response(response, self.config.body_limit).await?);

        self.finish(action, outcome)
    }

    /// Invokes a fallible `action`, recording a returned error as the outcome.
    ///
    /// # Returns
    /// - `Ok(BaseTestBuilderWithInvokedAction)` - Chain over the captured response or error
    /// - `Err(Error::ResponseBody)` - The body could not be collected within the body limit
    pub async fn calling_fallible<F, Fut, R, E>(
        self,
        action: &str,
        invoke: F,
    ) -> Result<BaseTestBuilderWithInvokedAction, Error>
    where
        F: FnOnce(Arc<C>) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        R: IntoResponse,
        E: fmt::Display + fmt::Debug,
    {
        tracing::debug!(
            controller = %std::any::type_name::<C>(),
            action,
            "invoking fallible action"
        );

        let outcome = match invoke(self.controller.clone()).await {
            Ok(response) => ActionOutcome::Response(
                capture_response(response.into_response(), self.config.body_limit).await?,
            ),
            Err(err) => {
                tracing::debug!(action, error = %err, "action returned an error");

                ActionOutcome::Error(ActionError::capture(&err))
            }
        };

        self.finish(action, outcome)
    }

    fn finish(
        self,
        action: &str,
        outcome: ActionOutcome,
    ) -> Result<BaseTestBuilderWithInvokedAction, Error> {
        let mut context = TestContext::with_invocation(
            ControllerHandle::new(self.controller),
            InvokedAction::new(action, self.arguments, outcome),
        );
        context.set_record_assertions(self.config.record_assertions);

        begin_chain(context)
    }
}

async fn capture_response(response: Response, limit: usize) -> Result<ActionResponse, Error> {
    let (parts, body) = response.into_parts();
    let body = axum::body::to_bytes(body, limit).await?;

    Ok(ActionResponse::new(parts.status, parts.headers, body))
}
