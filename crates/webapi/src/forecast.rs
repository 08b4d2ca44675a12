//! Weather forecast records.

use chrono::{Days, NaiveDate};
use cleanplate_core::ValueObject;
use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

/// Labels a forecast summary is drawn from.
pub const SUMMARIES: [&str; 10] = [
    "Freezing", "Bracing", "Chilly", "Cool", "Mild", "Warm", "Balmy", "Hot", "Sweltering",
    "Scorching",
];

/// Generated temperatures fall in `MIN_TEMPERATURE_C..MAX_TEMPERATURE_C`.
pub const MIN_TEMPERATURE_C: i32 = -20;
pub const MAX_TEMPERATURE_C: i32 = 55;

/// One day of forecast.
#[derive(Debug, Clone, Serialize, Deserialize, ValueObject)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    date: NaiveDate,
    temperature_c: i32,
    temperature_f: i32,
    summary: Option<String>,
}

impl WeatherForecast {
    pub fn new(date: NaiveDate, temperature_c: i32, summary: Option<String>) -> Self {
        Self {
            date,
            temperature_c,
            temperature_f: fahrenheit(temperature_c),
            summary,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn temperature_c(&self) -> i32 {
        self.temperature_c
    }

    pub fn temperature_f(&self) -> i32 {
        self.temperature_f
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}

/// `32 + c / 0.5556`, truncated toward zero.
pub fn fahrenheit(temperature_c: i32) -> i32 {
    32 + (f64::from(temperature_c) / 0.5556) as i32
}

/// Forecast for `days` consecutive days, starting the day after `today`.
///
/// Stops early rather than overflowing past the last representable date.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, days: usize) -> Vec<WeatherForecast> {
    (1..=days as u64)
        .map_while(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| {
            let temperature_c = rng.random_range(MIN_TEMPERATURE_C..MAX_TEMPERATURE_C);
            let summary = SUMMARIES.choose(&mut *rng).map(|s| (*s).to_string());
            WeatherForecast::new(date, temperature_c, summary)
        })
        .collect()
}
