//! Structured logging setup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::ObservabilityError;

/// Crates whose events the default filter lets through.
const FILTERED_TARGETS: &[&str] = &["parts_commerce", "parts_cli", "parts_observability"];

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Directive text understood by `EnvFilter`.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// One step more verbose, saturating at `Trace`.
    pub fn more_verbose(self) -> Self {
        match self {
            Self::Error => Self::Warn,
            Self::Warn => Self::Info,
            Self::Info => Self::Debug,
            Self::Debug | Self::Trace => Self::Trace,
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

impl FromStr for LogLevel {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ObservabilityError::UnknownLevel(other.to_string())),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines, for log aggregation.
    Json,
    /// Human-readable lines, for terminals.
    #[default]
    Human,
}

/// The `[logging]` configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Filter directives for our crates at the configured level.
    pub fn directives(&self) -> String {
        FILTERED_TARGETS
            .iter()
            .map(|target| format!("{}={}", target, self.level.as_directive()))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn env_filter(&self) -> Result<EnvFilter, ObservabilityError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(self.directives())
                .map_err(|e| ObservabilityError::InvalidFilter(e.to_string())),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Human => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))?;
    tracing::debug!(
        level = %config.level,
        format = ?config.format,
        "logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!(matches!(
            "loud".parse::<LogLevel>(),
            Err(ObservabilityError::UnknownLevel(l)) if l == "loud"
        ));
    }

    #[test]
    fn test_more_verbose() {
        assert_eq!(LogLevel::Warn.more_verbose(), LogLevel::Info);
        assert_eq!(LogLevel::Trace.more_verbose(), LogLevel::Trace);
    }

    #[test]
    fn test_directives() {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Json,
        };
        assert_eq!(
            config.directives(),
            "parts_commerce=debug,parts_cli=debug,parts_observability=debug"
        );
    }

    #[test]
    fn test_config_from_toml() {
        let config: LoggingConfig = toml::from_str("level = \"info\"\nformat = \"json\"").unwrap();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.format, LogFormat::Json);

        let config: LoggingConfig = toml::from_str("").unwrap();
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig {
            level: LogLevel::Debug,
            format: LogFormat::Human,
        };
        // The first call also emits the "logging initialized" event.
        init_logging(&config).unwrap();
        assert!(matches!(
            init_logging(&config),
            Err(ObservabilityError::AlreadyInitialized(_))
        ));
    }
}
