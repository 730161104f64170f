//! Builder family of an assertion chain.
//!
//! Builders compose rather than inherit. [`BaseTestBuilder`] only carries the [`TestContext`];
//! [`BaseTestBuilderWithInvokedAction`] wraps it once the context is known to hold an invoked
//! action; [`AndProvideTestBuilder`] wraps that in turn. Capabilities are expressed by two traits:
//!
//! - [`ContextCarrier`]: implemented by every node, gives access to the shared context.
//! - [`InvokedActionProvider`]: implemented by nodes that expose the assertion vocabulary
//!   (the `AwaitingAssertion` state of a chain).
//!
//! [`AndTestBuilder`] is the `AwaitingContinuation` state: it is what every assertion returns and
//! only offers `and()` to resume.

mod and;
mod base;
mod invoked_action;

use std::{any::Any, collections::BTreeMap};

pub use and::{AndProvideTestBuilder, AndTestBuilder};
pub use base::BaseTestBuilder;
pub use invoked_action::BaseTestBuilderWithInvokedAction;

use crate::context::{ActionOutcome, ControllerType, InvokedAction, TestContext};

/// A builder holding the context of its chain.
///
/// Builders only hand out shared access to the context. The one write they allow is logging a
/// passing assertion, so the context of a chain can be neither replaced nor stripped of its
/// invocation while the chain is evaluated:
///
/// ```compile_fail
/// use std::sync::Arc;
/// use action_chain::{BaseTestBuilder, ContextCarrier, ControllerHandle, TestContext};
///
/// let builder = BaseTestBuilder::new(TestContext::new(ControllerHandle::new(Arc::new(()))));
/// *builder.context() = TestContext::new(ControllerHandle::new(Arc::new(())));
/// ```
pub trait ContextCarrier: Sized {
    /// Shared access to the chain's context.
    fn context(&self) -> &TestContext;

    /// Logs a passing assertion in the chain's context.
    ///
    /// # Arguments
    /// - `name` - Short name of the assertion, e.g. `status`
    /// - `detail` - What the assertion checked, e.g. `200 OK`
    fn record_assertion(&mut self, name: impl Into<String>, detail: impl Into<String>);

    /// Ends the chain and hands the context back.
    fn into_context(self) -> TestContext;

    /// Whether `other` belongs to the same chain as `self`.
    fn same_chain<O: ContextCarrier>(&self, other: &O) -> bool {
        self.context().chain_id() == other.context().chain_id()
    }
}

/// Read access to the invoked action, available once an action has run.
///
/// Assertion vocabularies are written as extension traits over `InvokedActionProvider` and
/// return an [`AndTestBuilder`] built from [`InvokedActionProvider::into_invoked_builder`].
pub trait InvokedActionProvider: ContextCarrier {
    /// The invoked action recorded in the context.
    fn invoked_action(&self) -> &InvokedAction;

    /// Converts this node into the plain invoked-action builder over the same context.
    fn into_invoked_builder(self) -> BaseTestBuilderWithInvokedAction;

    /// Name the action was invoked under.
    fn invoked_action_name(&self) -> &str {
        self.invoked_action().name()
    }

    /// Type of the controller the action ran on.
    fn controller_type(&self) -> ControllerType {
        self.context().controller_type()
    }

    /// Response or error the action produced.
    fn action_result(&self) -> &ActionOutcome {
        self.invoked_action().outcome()
    }

    /// All arguments recorded for the action, by name.
    fn action_arguments(&self) -> &BTreeMap<String, serde_json::Value> {
        self.invoked_action().arguments()
    }

    /// Argument recorded under `name`, if any.
    fn action_argument(&self, name: &str) -> Option<&serde_json::Value> {
        self.invoked_action().argument(name)
    }

    /// Borrows the controller under test as `C`.
    fn controller<C: Any>(&self) -> Option<&C> {
        self.context().controller::<C>()
    }
}
