use std::{any::Any, sync::Arc};

use crate::{
    builder::{BaseTestBuilderWithInvokedAction, ContextCarrier, InvokedActionProvider},
    context::{ActionOutcome, InvokedAction, TestContext},
    error::Error,
};

/// Node returned by every assertion; resumes the chain with [`AndTestBuilder::and`].
#[derive(Debug)]
pub struct AndTestBuilder {
    inner: BaseTestBuilderWithInvokedAction,
}

impl AndTestBuilder {
    /// Wraps the invoked-action builder an assertion has just consumed.
    pub fn new(inner: BaseTestBuilderWithInvokedAction) -> Self {
        Self { inner }
    }

    /// Continues the chain with the assertion vocabulary over the same context.
    pub fn and(self) -> AndProvideTestBuilder {
        AndProvideTestBuilder::from(self.inner)
    }
}

impl ContextCarrier for AndTestBuilder {
    fn context(&self) -> &TestContext {
        self.inner.context()
    }

    fn record_assertion(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        self.inner.record_assertion(name, detail);
    }

    fn into_context(self) -> TestContext {
        self.inner.into_context()
    }
}

/// Provides controller and action information after an intermediate assertion.
///
/// Adds no state and no checks of its own: it composes the invoked-action builder, so the
/// whole assertion vocabulary is available again on the same context.
#[derive(Debug)]
pub struct AndProvideTestBuilder {
    inner: BaseTestBuilderWithInvokedAction,
}

impl AndProvideTestBuilder {
    /// Builds over an optional context, failing when it is absent or has no invoked action.
    pub fn try_new(context: Option<TestContext>) -> Result<Self, Error> {
        BaseTestBuilderWithInvokedAction::try_new(context).map(Self::from)
    }

    /// Shared reference to the controller under test, if it is a `C`.
    pub fn and_provide_controller<C: Any + Send + Sync>(&self) -> Option<Arc<C>> {
        self.context().controller_handle().downcast_arc::<C>()
    }

    /// Name of the invoked action.
    pub fn and_provide_action_name(&self) -> &str {
        self.invoked_action_name()
    }

    /// Response or error the invoked action produced.
    pub fn and_provide_action_result(&self) -> &ActionOutcome {
        self.action_result()
    }
}

impl From<BaseTestBuilderWithInvokedAction> for AndProvideTestBuilder {
    fn from(inner: BaseTestBuilderWithInvokedAction) -> Self {
        Self { inner }
    }
}

impl ContextCarrier for AndProvideTestBuilder {
    fn context(&self) -> &TestContext {
        self.inner.context()
    }

    fn record_assertion(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        self.inner.record_assertion(name, detail);
    }

    fn into_context(self) -> TestContext {
        self.inner.into_context()
    }
}

impl InvokedActionProvider for AndProvideTestBuilder {
    fn invoked_action(&self) -> &InvokedAction {
        self.inner.invoked_action()
    }

    fn into_invoked_builder(self) -> BaseTestBuilderWithInvokedAction {
        self.inner
    }
}
