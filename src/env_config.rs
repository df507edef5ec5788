//! Shared environment configuration for the hanoi binaries.
//!
//! Consolidates `HANOI_RESERVE_CAP` and `RUST_LOG` reads, plus tracing setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::DEFAULT_RESERVE_CAP;

/// Read `HANOI_RESERVE_CAP` (default [`DEFAULT_RESERVE_CAP`]).
///
/// Unparseable values fall back to the default with a warning.
pub fn reserve_cap() -> usize {
    match std::env::var("HANOI_RESERVE_CAP") {
        Ok(raw) => parse_reserve_cap(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "ignoring invalid HANOI_RESERVE_CAP");
            DEFAULT_RESERVE_CAP
        }),
        Err(_) => DEFAULT_RESERVE_CAP,
    }
}

fn parse_reserve_cap(raw: &str) -> Option<usize> {
    raw.trim().replace('_', "").parse().ok()
}

/// Default log directive for a `-v` count: 0 → warn, 1 → info, 2+ → debug.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Initialize the tracing subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise the level comes from `verbosity`.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
