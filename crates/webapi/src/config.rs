//! Runtime settings, read from the environment.

use thiserror::Error;

/// Number of forecast records the demo binary produces.
pub const FORECAST_DAYS_ENV: &str = "CLEANPLATE_FORECAST_DAYS";

pub const DEFAULT_FORECAST_DAYS: usize = 5;
pub const MAX_FORECAST_DAYS: usize = 31;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number, got `{value}`")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be between 1 and {max}, got {value}")]
    OutOfRange {
        var: &'static str,
        value: usize,
        max: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub forecast_days: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let forecast_days = match lookup(FORECAST_DAYS_ENV) {
            None => DEFAULT_FORECAST_DAYS,
            Some(raw) => parse_days(&raw)?,
        };
        Ok(Self { forecast_days })
    }
}

fn parse_days(raw: &str) -> Result<usize, ConfigError> {
    let value: usize = raw.trim().parse().map_err(|_| ConfigError::NotANumber {
        var: FORECAST_DAYS_ENV,
        value: raw.to_string(),
    })?;

    if (1..=MAX_FORECAST_DAYS).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            var: FORECAST_DAYS_ENV,
            value,
            max: MAX_FORECAST_DAYS,
        })
    }
}
