use std::io::Write;

use anyhow::Context;
use cleanplate_webapi::{Settings, WeatherForecastController};

fn main() -> anyhow::Result<()> {
    cleanplate_observability::init();

    let settings = Settings::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid configuration; using defaults");
        Settings::default()
    });

    let forecast = WeatherForecastController::new().get_days(settings.forecast_days);
    tracing::info!(days = forecast.len(), "serving weather forecast");

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &forecast).context("failed to encode forecast")?;
    writeln!(out).context("failed to write forecast")?;

    Ok(())
}
