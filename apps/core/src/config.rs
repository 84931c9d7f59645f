//! Environment-driven configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Unset variables fall back to defaults; malformed ones are errors.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::{CoreError, Result};
use crate::insights::analyzer::{DEFAULT_DAILY_SERIES_LEN, DEFAULT_RECENT_LIMIT, MAX_WINDOW};

pub const ENV_WINDOW_SIZE: &str = "DILAZAAD_WINDOW_SIZE";
pub const ENV_RECENT_LIMIT: &str = "DILAZAAD_RECENT_LIMIT";
pub const ENV_DAILY_SERIES_LEN: &str = "DILAZAAD_DAILY_SERIES_LEN";
pub const ENV_LOG_FORMAT: &str = "DILAZAAD_LOG_FORMAT";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(CoreError::Config(format!("unknown log format '{}'", other))),
        }
    }
}

/// Runtime settings for the analyzer and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CoreConfig {
    /// Most recent history records read per analysis.
    #[validate(range(min = 1, max = 100))]
    pub window_size: usize,
    /// Analyzed messages returned for the recent list.
    #[validate(range(min = 1, max = 100))]
    pub recent_limit: usize,
    /// Days kept in the mood series.
    #[validate(range(min = 1, max = 31))]
    pub daily_series_len: usize,
    pub log_format: LogFormat,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            window_size: MAX_WINDOW,
            recent_limit: DEFAULT_RECENT_LIMIT,
            daily_series_len: DEFAULT_DAILY_SERIES_LEN,
            log_format: LogFormat::Pretty,
        }
    }
}

fn read_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    CoreError: From<T::Err>,
{
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| match CoreError::from(e) {
                CoreError::Config(msg) => CoreError::Config(format!("{}: {}", key, msg)),
                other => other,
            }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(CoreError::Config(format!("{} is not valid unicode", key)))
        }
    }
}

impl CoreConfig {
    /// Load from the environment, reading `.env` first if one exists.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_process_env()
    }

    /// Load from the current process environment only.
    pub fn from_process_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            window_size: read_var(ENV_WINDOW_SIZE)?.unwrap_or(defaults.window_size),
            recent_limit: read_var(ENV_RECENT_LIMIT)?.unwrap_or(defaults.recent_limit),
            daily_series_len: read_var(ENV_DAILY_SERIES_LEN)?
                .unwrap_or(defaults.daily_series_len),
            log_format: read_var(ENV_LOG_FORMAT)?.unwrap_or(defaults.log_format),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 4] = [
        ENV_WINDOW_SIZE,
        ENV_RECENT_LIMIT,
        ENV_DAILY_SERIES_LEN,
        ENV_LOG_FORMAT,
    ];

    #[test]
    fn test_defaults_when_unset() {
        temp_env::with_vars_unset(ALL_VARS, || {
            let config = CoreConfig::from_process_env().expect("defaults");
            assert_eq!(config, CoreConfig::default());
            assert_eq!(config.window_size, 100);
            assert_eq!(config.daily_series_len, 14);
        });
    }

    #[test]
    fn test_reads_overrides() {
        temp_env::with_vars(
            [
                (ENV_WINDOW_SIZE, Some("50")),
                (ENV_RECENT_LIMIT, Some(" 10 ")),
                (ENV_DAILY_SERIES_LEN, None),
                (ENV_LOG_FORMAT, Some("Bunyan")),
            ],
            || {
                let config = CoreConfig::from_process_env().expect("valid overrides");
                assert_eq!(config.window_size, 50);
                assert_eq!(config.recent_limit, 10);
                assert_eq!(config.daily_series_len, 14);
                assert_eq!(config.log_format, LogFormat::Bunyan);
            },
        );
    }

    #[test]
    fn test_window_above_limit_is_rejected() {
        temp_env::with_vars(
            [
                (ENV_WINDOW_SIZE, Some("250")),
                (ENV_RECENT_LIMIT, None),
                (ENV_DAILY_SERIES_LEN, None),
                (ENV_LOG_FORMAT, None),
            ],
            || {
                let err = CoreConfig::from_process_env().unwrap_err();
                assert!(matches!(err, CoreError::Validation(_)));
            },
        );
    }

    #[test]
    fn test_malformed_number_is_config_error() {
        temp_env::with_vars(
            [
                (ENV_WINDOW_SIZE, Some("lots")),
                (ENV_RECENT_LIMIT, None),
                (ENV_DAILY_SERIES_LEN, None),
                (ENV_LOG_FORMAT, None),
            ],
            || {
                let err = CoreConfig::from_process_env().unwrap_err();
                assert!(err.to_string().contains(ENV_WINDOW_SIZE));
            },
        );
    }

    #[test]
    fn test_unknown_log_format() {
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("TEXT".parse::<LogFormat>().ok(), Some(LogFormat::Pretty));
    }
}
