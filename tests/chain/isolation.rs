//! Tests for isolation between independent chains.

use std::sync::Arc;

use axum::http::StatusCode;

use super::*;

/// Tests that two chains over one shared controller keep separate contexts.
///
/// Verifies that assertions recorded in one chain never appear in the other, even though both
/// invoke actions on the same controller instance.
///
/// Expected: Ok with distinct chain ids and separate assertion logs
#[tokio::test]
async fn chains_over_shared_controller_are_isolated() -> Result<(), Error> {
    let controller = Arc::new(HomeController::default());

    let first = ControllerTest::from_shared(controller.clone())
        .calling("index", |c| async move { c.index().await })
        .await?;
    let second = ControllerTest::from_shared(controller.clone())
        .calling("health", |c| async move { c.health().await })
        .await?;

    assert!(!first.same_chain(&second));

    let first = first
        .should_return_status(StatusCode::OK)?
        .and()
        .should_return_kind(ResultKind::View)?
        .into_context();
    let second = second.into_context();

    assert_ne!(first.chain_id(), second.chain_id());
    assert_eq!(first.assertions().len(), 2);
    assert!(second.assertions().is_empty());
    assert_eq!(second.invoked_action().unwrap().name(), "health");

    Ok(())
}

/// Tests chains evaluated in parallel on separate tasks.
///
/// Expected: Ok with every task observing only its own invocation
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_chains_do_not_interfere() -> Result<(), Error> {
    let fixtures = FixtureBuilder::new()
        .with_user(1, "Ada")
        .with_user(2, "Grace")
        .with_user(3, "Barbara")
        .build();
    let controller = Arc::new(fixtures.account);

    let mut handles = Vec::new();
    for user_id in 1..=3 {
        let controller = controller.clone();
        handles.push(tokio::spawn(async move {
            let context = ControllerTest::from_shared(controller)
                .with_argument("user_id", user_id)?
                .calling("profile", move |c| async move { c.profile(user_id).await })
                .await?
                .should_return_status(StatusCode::OK)?
                .into_context();

            Ok::<_, Error>((user_id, context))
        }));
    }

    for handle in handles {
        let (user_id, context) = handle.await.unwrap()?;
        let action = context.invoked_action().unwrap();

        assert_eq!(action.argument("user_id"), Some(&serde_json::json!(user_id)));
        let profile: ProfileDto = action.outcome().response().unwrap().json().unwrap();
        assert_eq!(profile.id, user_id);
        assert_eq!(context.assertions().len(), 1);
    }

    Ok(())
}
