//! Diagnostic log stream
//!
//! Installs a `tracing` subscriber that writes one line per event to stderr,
//! keeping diagnostics apart from the interactive output on stdout.

use tracing_subscriber::fmt::time::ChronoLocal;

use crate::config::Settings;
use crate::error::{EcoTrackError, EcoTrackResult};

/// Timestamp layout for log lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Install the global subscriber
///
/// # Errors
///
/// Returns a `Config` error if the filter is invalid or a subscriber has
/// already been installed.
pub fn init(settings: &Settings) -> EcoTrackResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(settings.env_filter()?)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(settings.ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| EcoTrackError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_an_error_not_a_panic() {
        let settings = Settings::default();
        let _ = init(&settings);
        let second = init(&settings);
        assert!(matches!(second, Err(EcoTrackError::Config(_))));
    }
}
