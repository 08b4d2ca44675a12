//! Request handlers.

use chrono::{NaiveDate, Utc};

use crate::forecast::{self, WeatherForecast};

/// Serves the demo weather forecast.
#[derive(Debug, Default, Clone, Copy)]
pub struct WeatherForecastController;

impl WeatherForecastController {
    /// Number of records [`WeatherForecastController::get`] returns.
    pub const FORECAST_DAYS: usize = 5;

    pub fn new() -> Self {
        Self
    }

    /// The fixed five-day forecast starting tomorrow.
    pub fn get(&self) -> Vec<WeatherForecast> {
        self.get_days(Self::FORECAST_DAYS)
    }

    /// Forecast for an arbitrary number of days starting tomorrow.
    pub fn get_days(&self, days: usize) -> Vec<WeatherForecast> {
        self.forecast_from(Utc::now().date_naive(), days)
    }

    fn forecast_from(&self, today: NaiveDate, days: usize) -> Vec<WeatherForecast> {
        let forecast = forecast::generate(&mut rand::rng(), today, days);
        tracing::debug!(%today, requested = days, produced = forecast.len(), "forecast generated");
        forecast
    }
}
