use crate::{
    builder::{BaseTestBuilder, ContextCarrier, InvokedActionProvider},
    context::{InvokedAction, TestContext},
    error::Error,
};

/// Builder over a context in which an action has been invoked.
///
/// This is the initial `AwaitingAssertion` node of a chain. It can only be constructed when the
/// context records an invocation. Builders only expose the context read-only, so nothing can
/// remove or replace the invocation afterwards and its accessors never have to re-check.
#[derive(Debug)]
pub struct BaseTestBuilderWithInvokedAction {
    base: BaseTestBuilder,
}

impl BaseTestBuilderWithInvokedAction {
    /// Wraps `base` once its context is known to carry an invoked action.
    ///
    /// # Returns
    /// - `Ok(BaseTestBuilderWithInvokedAction)` - Builder over the same context
    /// - `Err(Error::InvalidState)` - No action has been invoked in the context
    pub fn try_from_base(base: BaseTestBuilder) -> Result<Self, Error> {
        if !base.context().has_invoked_action() {
            return Err(Error::InvalidState(format!(
                "no action has been invoked on {} in {}",
                base.context().controller_type(),
                base.context().chain_id()
            )));
        }

        Ok(Self { base })
    }

    /// Builds over an optional context, failing when it is absent or has no invoked action.
    pub fn try_new(context: Option<TestContext>) -> Result<Self, Error> {
        Self::try_from_base(BaseTestBuilder::try_new(context)?)
    }
}

impl TryFrom<TestContext> for BaseTestBuilderWithInvokedAction {
    type Error = Error;

    fn try_from(context: TestContext) -> Result<Self, Self::Error> {
        Self::try_from_base(BaseTestBuilder::new(context))
    }
}

impl ContextCarrier for BaseTestBuilderWithInvokedAction {
    fn context(&self) -> &TestContext {
        self.base.context()
    }

    fn record_assertion(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        self.base.record_assertion(name, detail);
    }

    fn into_context(self) -> TestContext {
        self.base.into_context()
    }
}

impl InvokedActionProvider for BaseTestBuilderWithInvokedAction {
    fn invoked_action(&self) -> &InvokedAction {
        match self.context().invoked_action() {
            Some(action) => action,
            None => unreachable!("invoked-action builders only wrap contexts with an invocation"),
        }
    }

    fn into_invoked_builder(self) -> BaseTestBuilderWithInvokedAction {
        self
    }
}
