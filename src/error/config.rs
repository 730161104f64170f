//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading [`ChainConfig`](crate::ChainConfig) from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable is set to a value that cannot be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}
