use crate::{
    Config, ForecastEntry, WeatherError, WeatherSnapshot, provider::openweather::OpenWeatherClient,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Source of current conditions and the 3-hour forecast for a city.
///
/// Implementations perform no retries and collapse every failure into
/// [`WeatherError::Unavailable`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError>;

    /// Forecast entries in chronological order.
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError>;
}

/// Construct the OpenWeather provider from config.
///
/// A missing API key is only logged: the provider will reject the requests
/// and every lookup ends as "data unavailable".
pub fn provider_from_config(config: &Config) -> Arc<dyn WeatherProvider> {
    if !config.has_api_key() {
        tracing::warn!(
            "No OpenWeather API key configured. Set OPENWEATHER_API_KEY or run `weather configure`."
        );
    }

    Arc::new(OpenWeatherClient::with_base_url(
        config.api_key().to_owned(),
        config.base_url().to_owned(),
    ))
}
