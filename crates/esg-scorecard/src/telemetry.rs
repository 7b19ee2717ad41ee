//! Tracing setup for the scorecard tooling. `RUST_LOG` overrides the
//! configured level so a single run can be turned up without touching the
//! environment file.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { value: String, source: ParseError },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { value, .. } => {
                write!(
                    f,
                    "log filter '{value}' is not a valid tracing directive; try 'info' or \
                     'esg_scorecard=debug'"
                )
            }
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "tracing subscriber could not be installed: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Install the global subscriber. Output stays compact and target-free so
/// scoring output and log lines read together on a terminal; ANSI color
/// follows the configured environment.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_from_config(config)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(config.ansi)
        .compact()
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

fn filter_from_config(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidFilter {
        value: config.log_level.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_level(level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: level.to_string(),
            ansi: false,
        }
    }

    #[test]
    fn plain_level_builds_a_filter() {
        assert!(filter_from_config(&config_with_level("info")).is_ok());
    }

    #[test]
    fn per_crate_directive_builds_a_filter() {
        assert!(filter_from_config(&config_with_level("esg_scorecard=debug,warn")).is_ok());
    }

    #[test]
    fn malformed_directive_reports_the_offending_value() {
        let err = filter_from_config(&config_with_level("===")).expect_err("directive rejected");
        match err {
            TelemetryError::InvalidFilter { value, .. } => assert_eq!(value, "==="),
            other => panic!("expected an invalid filter error, got {other:?}"),
        }
    }
}
