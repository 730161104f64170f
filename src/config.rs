//! Harness configuration.

use crate::error::config::ConfigError;

/// Environment variable overriding [`ChainConfig::body_limit`].
pub const BODY_LIMIT_VAR: &str = "ACTION_CHAIN_BODY_LIMIT";
/// Environment variable overriding [`ChainConfig::record_assertions`].
pub const RECORD_ASSERTIONS_VAR: &str = "ACTION_CHAIN_RECORD_ASSERTIONS";

const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Settings applied by the invocation harness to every chain it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    /// Maximum number of response body bytes collected from an action.
    pub body_limit: usize,
    /// Whether passing assertions are logged into the test context.
    pub record_assertions: bool,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            body_limit: DEFAULT_BODY_LIMIT,
            record_assertions: true,
        }
    }
}

impl ChainConfig {
    /// Reads the configuration from the environment.
    ///
    /// Variables that are not set keep their default value; variables that are set but cannot
    /// be parsed are reported rather than ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            body_limit: parse_var(BODY_LIMIT_VAR, defaults.body_limit, |raw| {
                raw.parse::<usize>().map_err(|e| e.to_string())
            })?,
            record_assertions: parse_var(
                RECORD_ASSERTIONS_VAR,
                defaults.record_assertions,
                parse_flag,
            )?,
        })
    }
}

fn parse_var<T>(
    var: &str,
    default: T,
    parse: impl FnOnce(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse(raw.trim()).map_err(|reason| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason,
        }),
        Err(std::env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean flag, found {:?}", other)),
    }
}
