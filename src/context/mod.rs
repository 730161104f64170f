//! Per-chain test context.
//!
//! A [`TestContext`] describes one simulated controller invocation: the controller it ran on, the
//! invoked action with its arguments and outcome, and the assertions performed so far. Exactly one
//! context flows through an assertion chain. It deliberately does not implement `Clone`; builders
//! move it from one link to the next, and the [`ChainId`] assigned at construction makes that
//! identity observable.

pub mod action;
pub mod controller;

use std::{
    any::Any,
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use chrono::{DateTime, Utc};

pub use action::{ActionError, ActionOutcome, ActionResponse, InvokedAction, ResultKind};
pub use controller::{ControllerHandle, ControllerType};

static NEXT_CHAIN_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a test context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId(u64);

impl ChainId {
    fn next() -> Self {
        Self(NEXT_CHAIN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain-{}", self.0)
    }
}

/// An assertion that passed while the chain was evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionRecord {
    /// Short name of the assertion, e.g. `status`.
    pub name: String,
    /// What was checked, e.g. `200 OK`.
    pub detail: String,
    /// When the assertion passed. Never earlier than the record before it.
    pub recorded_at: DateTime<Utc>,
}

/// State of one simulated controller invocation, shared by every builder of a chain.
#[derive(Debug)]
pub struct TestContext {
    chain_id: ChainId,
    controller: ControllerHandle,
    invoked_action: Option<InvokedAction>,
    assertions: Vec<AssertionRecord>,
    record_assertions: bool,
}

impl TestContext {
    /// Creates a context for `controller` before any action has been invoked.
    pub fn new(controller: ControllerHandle) -> Self {
        Self {
            chain_id: ChainId::next(),
            controller,
            invoked_action: None,
            assertions: Vec::new(),
            record_assertions: true,
        }
    }

    /// Creates a context that already records `action` as invoked.
    pub fn with_invocation(controller: ControllerHandle, action: InvokedAction) -> Self {
        let mut context = Self::new(controller);
        context.record_invocation(action);
        context
    }

    /// Enables or disables logging of passing assertions.
    pub fn set_record_assertions(&mut self, enabled: bool) {
        self.record_assertions = enabled;
    }

    /// Records the invoked action, replacing any earlier invocation.
    pub fn record_invocation(&mut self, action: InvokedAction) {
        self.invoked_action = Some(action);
    }

    /// Logs a passing assertion when recording is enabled.
    pub fn record_assertion(&mut self, name: impl Into<String>, detail: impl Into<String>) {
        if !self.record_assertions {
            return;
        }

        let now = Utc::now();
        let recorded_at = match self.assertions.last() {
            Some(last) if last.recorded_at > now => last.recorded_at,
            _ => now,
        };

        self.assertions.push(AssertionRecord {
            name: name.into(),
            detail: detail.into(),
            recorded_at,
        });
    }

    /// Identifier shared by every builder of this chain.
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Type-erased handle to the controller under test.
    pub fn controller_handle(&self) -> &ControllerHandle {
        &self.controller
    }

    /// Type of the controller under test.
    pub fn controller_type(&self) -> ControllerType {
        self.controller.controller_type()
    }

    /// Borrows the controller under test as `C`.
    pub fn controller<C: Any>(&self) -> Option<&C> {
        self.controller.downcast_ref::<C>()
    }

    /// The invoked action, once one has been recorded.
    pub fn invoked_action(&self) -> Option<&InvokedAction> {
        self.invoked_action.as_ref()
    }

    /// Whether an action has been invoked in this context.
    pub fn has_invoked_action(&self) -> bool {
        self.invoked_action.is_some()
    }

    /// Passing assertions in the order they were recorded.
    pub fn assertions(&self) -> &[AssertionRecord] {
        &self.assertions
    }
}
