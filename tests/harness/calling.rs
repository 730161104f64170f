//! Tests for `ControllerTest::calling` and `ControllerTest::calling_fallible`.

use axum::http::StatusCode;

use super::*;

/// Tests an action whose error type renders into a response.
///
/// Verifies that `calling` renders a `FixtureError` exactly as axum would, producing a JSON
/// error body with the matching status code.
///
/// Expected: Ok with 404 Not Found and an ErrorDto body
#[tokio::test]
async fn calling_renders_error_response() -> Result<(), Error> {
    init_tracing();
    let fixtures = FixtureBuilder::new().build();

    ControllerTest::new(fixtures.account)
        .with_argument("user_id", 9)?
        .calling("profile", |c| async move { c.profile(9).await })
        .await?
        .should_return_status(StatusCode::NOT_FOUND)?
        .and()
        .should_return_json(&ErrorDto {
            error: "User 9 not found".to_string(),
        })?;

    Ok(())
}

/// Tests an action whose error is captured rather than rendered.
///
/// Expected: Ok with the error message available to should_fail_with
#[tokio::test]
async fn calling_fallible_captures_error() -> Result<(), Error> {
    let fixtures = FixtureBuilder::new().signed_in_as(1).build();

    let builder = ControllerTest::new(fixtures.account)
        .calling_fallible("rename", |c| async move { c.rename(1, "  ").await })
        .await?;

    let err = builder.action_result().error().unwrap();
    assert_eq!(err.debug(), "EmptyName");

    builder.should_fail_with("must not be empty")?;

    Ok(())
}

/// Tests a fallible action that succeeds.
///
/// Expected: Ok with the rendered response
#[tokio::test]
async fn calling_fallible_captures_success() -> Result<(), Error> {
    let fixtures = FixtureBuilder::new().with_user(1, "Ada").signed_in_as(1).build();

    ControllerTest::new(fixtures.account)
        .calling_fallible("current", |c| async move { c.current().await })
        .await?
        .should_succeed()?
        .and()
        .should_return_json(&ProfileDto {
            id: 1,
            name: "Ada".to_string(),
        })?;

    Ok(())
}

/// Tests a redirect produced when no user is signed in.
///
/// Expected: Ok with a redirect to the login page
#[tokio::test]
async fn calling_captures_redirect() -> Result<(), Error> {
    let fixtures = FixtureBuilder::new().build();

    ControllerTest::new(fixtures.account)
        .calling("current", |c| async move { c.current().await })
        .await?
        .should_return_kind(ResultKind::Redirect)?
        .and()
        .should_redirect_to("/account/login")?;

    Ok(())
}

/// Tests that should_fail_with rejects an action that produced a response.
///
/// Expected: Err with an assertion failure naming the action
#[tokio::test]
async fn should_fail_with_on_successful_action() -> Result<(), Error> {
    let result = ControllerTest::new(HomeController::default())
        .calling_fallible("index", |c| async move {
            Ok::<_, FixtureError>(c.index().await)
        })
        .await?
        .should_fail_with("not found");

    let err = result.unwrap_err();
    assert_eq!(err.as_assertion().map(|e| e.action()), Some("index"));

    Ok(())
}

/// Tests capturing a permanent redirect from the home controller.
///
/// Expected: Ok with 308 Permanent Redirect to the site root
#[tokio::test]
async fn calling_captures_permanent_redirect() -> Result<(), Error> {
    ControllerTest::new(HomeController::default())
        .calling("legacy_index", |c| async move { c.legacy_index().await })
        .await?
        .should_return_status(StatusCode::PERMANENT_REDIRECT)?
        .and()
        .should_redirect_to("/")?;

    Ok(())
}
