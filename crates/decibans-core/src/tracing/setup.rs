//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "DECIBANS_LOG";

/// Default filter used when `DECIBANS_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "decibans=info";

/// Initialize the decibans tracing subscriber.
///
/// Reads `DECIBANS_LOG` for filter directives, e.g.
/// `DECIBANS_LOG=decibans_analysis=debug`. Falls back to `decibans=info`.
///
/// Idempotent. If another global subscriber is already installed the call
/// leaves it in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

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
