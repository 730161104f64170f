//! Tests for a vocabulary defined outside the crate.

use action_chain::AssertionError;
use axum::http::StatusCode;

use super::*;

/// Page assertions written against the public extension points.
trait PageAssertions: InvokedActionProvider {
    fn should_render_heading(self, heading: &str) -> Result<AndTestBuilder, Error> {
        let expected = format!("<h1>{}</h1>", heading);
        let status = match self.action_result().response() {
            Some(response) if response.text().contains(&expected) => None,
            Some(response) => Some(response.status()),
            None => Some(StatusCode::INTERNAL_SERVER_ERROR),
        };

        if let Some(actual) = status {
            return Err(AssertionError::Status {
                action: self.invoked_action_name().to_string(),
                expected: StatusCode::OK,
                actual,
            }
            .into());
        }

        let mut builder = self.into_invoked_builder();
        builder.record_assertion("heading", heading);

        Ok(AndTestBuilder::new(builder))
    }
}

impl<B: InvokedActionProvider> PageAssertions for B {}

/// Tests interleaving a custom vocabulary with the built-in one.
///
/// Expected: Ok with all three assertions logged in one context
#[tokio::test]
async fn custom_vocabulary_composes_with_builtin() -> Result<(), Error> {
    let fixtures = FixtureBuilder::new().with_title("Dashboard").build();

    let context = ControllerTest::new(fixtures.home)
        .calling("index", |c| async move { c.index().await })
        .await?
        .should_return_status(StatusCode::OK)?
        .and()
        .should_render_heading("Dashboard")?
        .and()
        .should_return_kind(ResultKind::View)?
        .into_context();

    let names: Vec<_> = context.assertions().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["status", "heading", "kind"]);

    Ok(())
}

/// Tests that a custom assertion's failure reaches the test unchanged.
///
/// Expected: Err with the custom assertion's failure
#[tokio::test]
async fn custom_vocabulary_failure_propagates() -> Result<(), Error> {
    let result = ControllerTest::new(HomeController::default())
        .calling("health", |c| async move { c.health().await })
        .await?
        .should_succeed()?
        .and()
        .should_render_heading("Dashboard");

    let err = result.unwrap_err();
    assert_eq!(
        err.as_assertion(),
        Some(&AssertionError::Status {
            action: "health".to_string(),
            expected: StatusCode::OK,
            actual: StatusCode::NO_CONTENT,
        })
    );

    Ok(())
}
