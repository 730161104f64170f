//! Tests for constructing builders directly from a test context.

use std::{collections::BTreeMap, sync::Arc};

use action_chain::{ActionOutcome, ActionResponse, ControllerHandle, InvokedAction};
use axum::{
    body::Bytes,
    http::{header, HeaderMap, HeaderValue, StatusCode},
};

use super::*;

fn home_index_context() -> TestContext {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    TestContext::with_invocation(
        ControllerHandle::new(Arc::new(HomeController::default())),
        InvokedAction::new(
            "index",
            BTreeMap::new(),
            ActionOutcome::Response(ActionResponse::new(
                StatusCode::OK,
                headers,
                Bytes::from_static(b"<h1>Home</h1>"),
            )),
        ),
    )
}

/// Tests that a root builder cannot be built without a context.
///
/// Expected: Err with InvalidState
#[test]
fn base_builder_without_context_is_invalid_state() {
    let result = BaseTestBuilder::try_new(None);

    assert!(matches!(result, Err(Error::InvalidState(_))));
}

/// Tests that every builder of the family refuses an absent context.
///
/// Expected: Err with InvalidState for each builder
#[test]
fn every_builder_without_context_is_invalid_state() {
    assert!(BaseTestBuilderWithInvokedAction::try_new(None)
        .unwrap_err()
        .is_invalid_state());
    assert!(AndProvideTestBuilder::try_new(None)
        .unwrap_err()
        .is_invalid_state());
}

/// Tests constructing the And continuation straight from a context.
///
/// Verifies that a context recording controller `HomeController`, action `index` and a view
/// result reads back exactly through the continuation's accessors.
///
/// Expected: Ok with accessors matching the context
#[test]
fn and_provide_from_context_reads_through() -> Result<(), Error> {
    let context = home_index_context();
    let chain_id = context.chain_id();

    let builder = AndProvideTestBuilder::try_new(Some(context))?;

    assert_eq!(builder.context().chain_id(), chain_id);
    assert_eq!(builder.invoked_action_name(), "index");
    assert!(builder.controller_type().is::<HomeController>());
    assert!(builder.controller::<HomeController>().is_some());
    assert_eq!(
        builder.action_result().response().unwrap().kind(),
        ResultKind::View
    );

    Ok(())
}

/// Tests that a chain cannot begin before an action was invoked.
///
/// Expected: Err with InvalidState
#[test]
fn begin_chain_before_invocation_is_invalid_state() {
    let context = TestContext::new(ControllerHandle::new(Arc::new(HomeController::default())));

    let result = begin_chain(context);

    assert!(matches!(result, Err(Error::InvalidState(_))));
}

/// Tests that a chain begun from a hand-built context accepts assertions.
///
/// Expected: Ok through two assertions
#[test]
fn begin_chain_from_context_accepts_assertions() -> Result<(), Error> {
    let context = begin_chain(home_index_context())?
        .should_return_status(StatusCode::OK)?
        .and()
        .should_return_kind(ResultKind::View)?
        .into_context();

    assert_eq!(context.assertions().len(), 2);

    Ok(())
}
