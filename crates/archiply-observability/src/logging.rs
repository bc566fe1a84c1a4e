//! Subscriber installation and log settings.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable whose filter directives override the configuration.
pub const LOG_ENV_VAR: &str = "ARCHIPLY_LOG";

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for production/log aggregation).
    Json,
    /// Human-readable format (for development).
    #[default]
    Human,
}

/// Logging section of the storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level when no explicit filter is given.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Full `EnvFilter` directive string, e.g. `"archiply_commerce=debug,info"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Set minimum log level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Directive used when `ARCHIPLY_LOG` is unset.
    pub fn directive(&self) -> String {
        match &self.filter {
            Some(filter) if !filter.trim().is_empty() => filter.trim().to_string(),
            _ => self.level.as_str().to_string(),
        }
    }
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(config.directive()))
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::default().as_str()))
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed; the existing one
/// stays in place.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Human => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if result.is_err() {
        return false;
    }

    tracing::info!(directive = %config.directive(), format = ?config.format, "logging initialized");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Error);
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_directive_defaults_to_level() {
        let config = LoggingConfig::default().with_level(LogLevel::Debug);
        assert_eq!(config.directive(), "debug");
    }

    #[test]
    fn test_directive_prefers_filter() {
        let config = LoggingConfig {
            filter: Some(" archiply_commerce=trace,warn ".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.directive(), "archiply_commerce=trace,warn");

        let blank = LoggingConfig {
            filter: Some("   ".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(blank.directive(), "info");
    }

    #[test]
    fn test_config_deserializes_lowercase() {
        let config: LoggingConfig =
            serde_json::from_str(r#"{"level":"warn","format":"json"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.filter, None);
    }

    #[test]
    fn test_second_init_is_rejected() {
        let config = LoggingConfig::default().with_format(LogFormat::Json);
        let _ = init_logging(&config);
        assert!(!init_logging(&config));
    }
}
