//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client behind the `WeatherProvider` abstraction
//! - Condition styling and forecast reduction
//! - Shared domain models and display formatting
//!
//! It is used by `weather-web` and `weather-cli`.

pub mod classify;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod format;
pub mod model;
pub mod provider;

pub use config::Config;
pub use dashboard::load_dashboard;
pub use error::WeatherError;
pub use model::{ConditionStyle, DailyForecastSummary, Dashboard, ForecastEntry, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherClient, provider_from_config};
