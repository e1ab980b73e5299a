use tracing::{info, instrument};

use crate::{
    classify::condition_style,
    error::WeatherError,
    forecast::{daily_summaries, hourly_series},
    model::{Dashboard, ForecastEntry, WeatherSnapshot},
    provider::WeatherProvider,
};

impl Dashboard {
    /// Combine fetched data with the classifier and forecast reducer outputs.
    pub fn assemble(city: &str, current: WeatherSnapshot, forecast: &[ForecastEntry]) -> Self {
        Self {
            city: city.to_string(),
            style: condition_style(&current.condition),
            current,
            hourly: hourly_series(forecast).to_vec(),
            daily: daily_summaries(forecast),
        }
    }
}

/// Fetch current conditions and forecast for `city` and build the dashboard.
///
/// Both requests are issued together; if either fails the whole lookup is
/// reported as unavailable.
#[instrument(skip(provider))]
pub async fn load_dashboard(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<Dashboard, WeatherError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(WeatherError::unavailable(city, "empty city name"));
    }

    let (current, forecast) = tokio::try_join!(provider.current(city), provider.forecast(city))?;
    let dashboard = Dashboard::assemble(city, current, &forecast);

    info!(
        condition = %dashboard.current.condition,
        hourly = dashboard.hourly.len(),
        daily = dashboard.daily.len(),
        "Dashboard loaded"
    );

    Ok(dashboard)
}
