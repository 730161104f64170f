//! Fluent assertion chains for testing controller actions.
//!
//! A test invokes one action on a controller through [`ControllerTest`], which captures the
//! produced response (or returned error) into a [`TestContext`]. The context then travels through
//! a chain of builders: every assertion consumes the current builder and hands back an
//! [`AndTestBuilder`], whose `and()` resumes the assertion vocabulary on an
//! [`AndProvideTestBuilder`]. The context is moved from node to node and never copied, so every
//! link of a chain observes the same invocation.
//!
//! ```ignore
//! ControllerTest::new(HomeController::default())
//!     .calling("index", |c| async move { c.index().await })
//!     .await?
//!     .should_return_status(StatusCode::OK)?
//!     .and()
//!     .should_return_kind(ResultKind::View)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assertion;
pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod harness;

pub use assertion::ActionResultAssertions;
pub use builder::{
    AndProvideTestBuilder, AndTestBuilder, BaseTestBuilder, BaseTestBuilderWithInvokedAction,
    ContextCarrier, InvokedActionProvider,
};
pub use config::ChainConfig;
pub use context::{
    ActionError, ActionOutcome, ActionResponse, AssertionRecord, ChainId, ControllerHandle,
    ControllerType, InvokedAction, ResultKind, TestContext,
};
pub use error::{assertion::AssertionError, config::ConfigError, Error};
pub use harness::{begin_chain, ControllerTest};

/// Common imports for writing assertion chains.
pub mod prelude {
    pub use crate::{
        begin_chain, ActionResultAssertions, AndProvideTestBuilder, AndTestBuilder,
        BaseTestBuilder, BaseTestBuilderWithInvokedAction, ChainConfig, ContextCarrier,
        ControllerTest, Error, InvokedActionProvider, ResultKind, TestContext,
    };
}
