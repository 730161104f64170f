use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::constant::TEST_LOG_FILTER;

static INIT: Once = Once::new();

/// Installs a global tracing subscriber for tests.
///
/// Loads a `.env` file if present and honours `RUST_LOG`, falling back to warnings only. Safe
/// to call from every test; only the first call has an effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        dotenvy::dotenv().ok();

        // Another test harness may already own the global subscriber
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| TEST_LOG_FILTER.into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}
