//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target log levels,
/// e.g. `PREFLIGHT_LOG=preflight::probes=trace`.
pub const LOG_ENV: &str = "PREFLIGHT_LOG";

/// Installs the global subscriber, writing to stderr so that logs never mix
/// with report output. Safe to call more than once.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "preflight=debug"
        } else {
            "preflight=warn"
        };
        let filter = match EnvFilter::try_from_env(LOG_ENV) {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new(fallback),
        };

        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
        if let Err(err) = installed {
            tracing::debug!(%err, "keeping the existing global subscriber");
        }
    });
}
