//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "CRYPTOMATCH_LOG";

/// Filter used when `CRYPTOMATCH_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "cryptomatch=info";

static INIT: Once = Once::new();

/// Initialize the CryptoMatch tracing/logging system.
///
/// Reads `CRYPTOMATCH_LOG` for per-module log levels, e.g.
/// `CRYPTOMATCH_LOG=cryptomatch_engine::matchmaking=debug,cryptomatch_core=warn`.
///
/// Idempotent. Does nothing if another global subscriber is already installed.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init();
    });
}
