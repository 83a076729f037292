//! Tracing subscriber setup for binaries, benches and tests that embed
//! graphkit.
//!
//! The library itself only emits `tracing` events; nothing is printed unless
//! the embedding program installs a subscriber, for example via
//! [`init_tracing`].

use std::env;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the filter passed to [`init_tracing`].
pub const LOG_ENV: &str = "GRAPHKIT_LOG";

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Install a global subscriber filtered by `GRAPHKIT_LOG` (or
/// `default_filter` when unset).
///
/// A bare level such as `"debug"` is scoped to the graphkit crates. Returns
/// `false` if a global subscriber was already installed, which makes repeated
/// calls from tests harmless.
#[must_use = "returns false when a subscriber was already installed"]
pub fn init_tracing(default_filter: &str, format: LogFormat) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if default_filter.contains('=') {
            default_filter.to_string()
        } else {
            format!(
                "graphkit_core={default_filter},graphkit_graph={default_filter},graphkit_greedy={default_filter}"
            )
        })
    });

    let registry = tracing_subscriber::registry().with(filter);

    let format = match env::var("GRAPHKIT_LOG_FORMAT").as_deref() {
        Ok("json") => LogFormat::Json,
        Ok("compact") => LogFormat::Compact,
        _ => format,
    };

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_ansi(false))
            .try_init()
            .is_ok(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_test_writer())
            .try_init()
            .is_ok(),
    }
}
