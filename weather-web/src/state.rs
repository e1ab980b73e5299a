use std::sync::Arc;

use tera::Tera;
use weather_core::{Config, WeatherProvider, provider_from_config};

use crate::{error::WebError, templates::build_templates};

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    pub templates: Arc<Tera>,
    /// City used when the request does not name one.
    pub default_city: Arc<str>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("provider", &self.provider)
            .field("default_city", &self.default_city)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>, default_city: &str) -> Result<Self, WebError> {
        Ok(Self {
            provider,
            templates: Arc::new(build_templates()?),
            default_city: Arc::from(default_city),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, WebError> {
        Self::new(provider_from_config(config), config.default_city())
    }

    /// The requested city, or the default when blank or missing.
    pub fn resolve_city(&self, requested: Option<&str>) -> String {
        requested
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&*self.default_city)
            .to_string()
    }
}
