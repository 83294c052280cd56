//! Diagnostic logging setup for the command-line tool

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "warn";

/// Build the stderr filter.
///
/// An explicit `--log-level` wins, then `RUST_LOG`, then `warn`.
pub fn build_filter(log_level: Option<&str>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Initialize logging to stderr.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logger(no_color: bool, log_level: Option<&str>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_filter(build_filter(log_level));

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_wins() {
        let filter = build_filter(Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(true, Some("off"));
        init_logger(true, Some("off"));
    }
}
