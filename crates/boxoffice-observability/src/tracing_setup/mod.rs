//! Tracing setup — structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use boxoffice_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV: &str = "BOXOFFICE_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads `BOXOFFICE_LOG` for filtering (e.g. `boxoffice_server=debug,info`).
/// Falls back to the configured `log_level` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    let level = config.log_level.clone();
    let json = config.json;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&level));
        install(filter, json);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter, false));
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    // A subscriber installed elsewhere (e.g. by a test harness) wins.
    let _ = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };
}
