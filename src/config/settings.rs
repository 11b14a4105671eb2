//! Runtime settings for Eco-Track
//!
//! Eco-Track has no settings file; the only knobs concern the diagnostic log
//! stream.
//!
//! ## Resolution Order
//!
//! 1. `--log-level` flag, or `ECO_TRACK_LOG` when the flag is absent (both
//!    read by the command-line parser)
//! 2. `--no-color` flag or a set `NO_COLOR` variable
//! 3. Defaults: `info`, colour on

use tracing_subscriber::EnvFilter;

use crate::error::EcoTrackError;

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "ECO_TRACK_LOG";

/// Environment variable that disables ANSI colour when set
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

/// Filter used when nothing else is configured
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings for the diagnostic log stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `EnvFilter` directive string, e.g. `info` or `eco_track=debug`
    pub log_filter: String,

    /// Whether log lines may use ANSI colour
    pub ansi: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            ansi: true,
        }
    }
}

impl Settings {
    /// Resolve settings from the parsed log filter and the colour flag
    ///
    /// `log_filter` already carries `ECO_TRACK_LOG` when no flag was given;
    /// only `NO_COLOR` is read from the environment here.
    pub fn load(log_filter: Option<&str>, no_color_flag: bool) -> Result<Self, EcoTrackError> {
        Self::resolve(
            log_filter,
            no_color_flag || std::env::var_os(NO_COLOR_ENV_VAR).is_some(),
        )
    }

    /// Resolve settings from explicit values
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the chosen filter is not valid
    /// `EnvFilter` syntax.
    pub fn resolve(
        log_filter: Option<&str>,
        no_color: bool,
    ) -> Result<Self, EcoTrackError> {
        let log_filter = log_filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string();

        let settings = Self {
            log_filter,
            ansi: !no_color,
        };
        settings.env_filter()?;
        Ok(settings)
    }

    /// Build the `EnvFilter` for these settings
    pub fn env_filter(&self) -> Result<EnvFilter, EcoTrackError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            EcoTrackError::Config(format!("Invalid log filter '{}': {}", self.log_filter, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(None, false).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_explicit_filter() {
        let settings = Settings::resolve(Some("eco_track=warn"), false).unwrap();
        assert_eq!(settings.log_filter, "eco_track=warn");
    }

    #[test]
    fn test_blank_filter_falls_back_to_default() {
        let settings = Settings::resolve(Some("  "), false).unwrap();
        assert_eq!(settings.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_no_color() {
        let settings = Settings::resolve(None, true).unwrap();
        assert!(!settings.ansi);
    }

    #[test]
    fn test_load_keeps_parsed_filter() {
        let settings = Settings::load(Some("debug"), true).unwrap();
        assert_eq!(settings.log_filter, "debug");
        assert!(!settings.ansi);
    }

    #[test]
    fn test_invalid_filter() {
        let result = Settings::resolve(Some("eco_track=loud"), false);
        assert!(matches!(result, Err(EcoTrackError::Config(_))));
    }
}
