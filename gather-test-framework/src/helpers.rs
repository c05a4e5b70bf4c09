//! Shared helpers for the acceptance suite.

use std::num::ParseIntError;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with the GATHER_LOG environment variable.
///
/// Defaults to "info" level if GATHER_LOG is not set. Later calls are
/// ignored so multiple suites can share one process.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("GATHER_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Parse a comma-separated list of integers as written in feature files.
///
/// Blank input yields an empty vector, so `[]` in a scenario maps to an
/// empty collection.
pub fn parse_values(input: &str) -> Result<Vec<i32>, ParseIntError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}
