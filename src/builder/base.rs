use crate::{builder::ContextCarrier, context::TestContext, error::Error};

/// Root of the builder family.
///
/// Holds the chain's context and exposes no assertions of its own.
#[derive(Debug)]
pub struct BaseTestBuilder {
    context: TestContext,
}

impl BaseTestBuilder {
    /// Starts a builder over `context`.
    pub fn new(context: TestContext) -> Self {
        Self { context }
    }

    /// Builds over an optional context.
    ///
    /// # Returns
    /// - `Ok(BaseTestBuilder)` - Builder holding the given context
    /// - `Err(Error::InvalidState)` - No context was given
    pub fn try_new(context: Option<TestContext>) -> Result<Self, Error> {
        context.map(Self::new).ok_or_else(|| {
            Error::InvalidState("a test builder cannot be constructed without a test context".to_string())
        })
    }
}

impl From<TestContext> for BaseTestBuilder {
    fn from(context: TestContext) -> Self {
        Self::new(context)
    }
}

impl ContextCarrier for BaseTestBuilder {
    fn context(&self) -> &TestContext {
        &self.context
    }

    fn record_assertion(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        self.context.record_assertion(name, detail);
    }

    fn into_context(self) -> TestContext {
        self.context
    }
}
