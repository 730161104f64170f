//! Tests for chain configuration applied by the harness.

use action_chain::{config::BODY_LIMIT_VAR, config::RECORD_ASSERTIONS_VAR, ConfigError};

use super::*;

/// Tests configuration read from the environment.
///
/// Both variables are exercised in one test since the environment is process-global.
///
/// Expected: Ok with overrides applied, then Err for an unparsable flag
#[test]
fn chain_config_from_env() {
    std::env::set_var(BODY_LIMIT_VAR, "1024");
    std::env::set_var(RECORD_ASSERTIONS_VAR, "off");

    let config = ChainConfig::from_env();

    std::env::set_var(RECORD_ASSERTIONS_VAR, "maybe");
    let invalid = ChainConfig::from_env();

    std::env::remove_var(BODY_LIMIT_VAR);
    std::env::remove_var(RECORD_ASSERTIONS_VAR);

    let config = config.unwrap();
    assert_eq!(config.body_limit, 1024);
    assert!(!config.record_assertions);

    match invalid {
        Err(ConfigError::InvalidEnvValue { var, .. }) => assert_eq!(var, RECORD_ASSERTIONS_VAR),
        other => panic!("expected InvalidEnvValue, got {:?}", other),
    }
}

/// Tests that a body larger than the configured limit is reported.
///
/// Expected: Err with ResponseBody
#[tokio::test]
async fn body_over_limit_is_response_body_error() {
    let result = ControllerTest::new(HomeController::default())
        .with_config(ChainConfig {
            body_limit: 8,
            record_assertions: true,
        })
        .calling("index", |c| async move { c.index().await })
        .await;

    assert!(matches!(result, Err(Error::ResponseBody(_))));
}

/// Tests that configuration errors convert into the chain error type.
///
/// Expected: Config variant wrapping the original error
#[test]
fn config_error_converts_into_error() {
    let err: Error = ConfigError::InvalidEnvValue {
        var: BODY_LIMIT_VAR.to_string(),
        reason: "invalid digit found in string".to_string(),
    }
    .into();

    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains(BODY_LIMIT_VAR));
}
