//! Tests for the chaining mechanism.
//!
//! These tests verify that every link of an assertion chain observes the same test context,
//! that the And continuation reads straight through to it, that broken chains fail at
//! construction time, and that independent chains never share state.

mod construction;
mod isolation;

use action_chain::prelude::*;
use action_chain_test_utils::prelude::*;
