use thiserror::Error;

/// Errors surfaced by weather providers.
///
/// Unknown cities, rejected credentials, transport failures and malformed
/// bodies all end up here: callers only ever show "data unavailable".
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather data unavailable for '{city}': {reason}")]
    Unavailable { city: String, reason: String },
}

impl WeatherError {
    pub fn unavailable(city: &str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            city: city.to_string(),
            reason: reason.into(),
        }
    }

    /// City the failed lookup was made for.
    pub fn city(&self) -> &str {
        match self {
            Self::Unavailable { city, .. } => city,
        }
    }
}
