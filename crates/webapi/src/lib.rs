//! Demo web API surface: the weather-forecast producer and its configuration.
//!
//! There is no HTTP listener; the controller is exercised directly by the binary and
//! the acceptance tests.

pub mod config;
pub mod controllers;
pub mod forecast;

pub use config::{ConfigError, Settings};
pub use controllers::WeatherForecastController;
pub use forecast::WeatherForecast;
