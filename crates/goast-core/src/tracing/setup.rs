//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GOAST_LOG";

/// Initialize the GoAST tracing/logging system.
///
/// Reads `GOAST_LOG` for per-module log levels, e.g.
/// `GOAST_LOG=goast_engine::api=debug,goast_engine::parsers=trace`.
/// Falls back to `goast=info` if `GOAST_LOG` is unset or invalid.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("goast=info"));

        // Another subscriber may already be installed by the embedder.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
