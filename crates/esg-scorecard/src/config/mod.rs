use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scorecard tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig {
                log_level,
                // Production logs are piped and archived; color codes only
                // garble them there.
                ansi: environment != AppEnvironment::Production,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyLogLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyLogLevel => {
                write!(f, "APP_LOG_LEVEL must name a tracing filter, e.g. 'info'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
