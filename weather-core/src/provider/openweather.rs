use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

use crate::{
    error::WeatherError,
    model::{ForecastEntry, WeatherSnapshot},
};

use super::WeatherProvider;

#[derive(Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl std::fmt::Debug for OpenWeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl OpenWeatherClient {
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// GET `{base_url}/{endpoint}` for a city in metric units and parse the body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        city: &str,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, "Requesting OpenWeather {endpoint}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenWeather {endpoint} request could not be sent");
                WeatherError::unavailable(city, format!("{endpoint} request failed: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read OpenWeather {endpoint} response body");
            WeatherError::unavailable(city, format!("{endpoint} body unreadable: {e}"))
        })?;

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "OpenWeather {endpoint} request failed");
            return Err(WeatherError::unavailable(
                city,
                format!("{endpoint} request failed with status {status}"),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse OpenWeather {endpoint} JSON");
            WeatherError::unavailable(city, format!("{endpoint} JSON malformed: {e}"))
        })
    }
}

/// Readings of the current-weather payload. Pressure and humidity back
/// mandatory tiles, so a body without them is rejected.
#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: Option<f64>,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwClouds {
    all: u8,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    /// Shift from UTC in seconds.
    timezone: Option<i32>,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    clouds: Option<OwClouds>,
    visibility: Option<u32>,
    sys: Option<OwSys>,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    timezone: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: Option<OwCity>,
    list: Vec<OwForecastEntry>,
}

/// Category, description and icon of the first weather element, if any.
fn primary_condition(weather: &[OwWeather]) -> (String, String, String) {
    weather.first().map_or_else(
        || ("Unknown".to_string(), "unknown".to_string(), String::new()),
        |w| (w.main.clone(), w.description.clone(), w.icon.clone()),
    )
}

fn utc_offset(shift_secs: Option<i32>) -> FixedOffset {
    shift_secs
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

fn local_time(ts: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.with_timezone(&offset))
}

fn snapshot_from(parsed: OwCurrentResponse) -> WeatherSnapshot {
    let offset = utc_offset(parsed.timezone);
    let observed_at =
        local_time(parsed.dt, offset).unwrap_or_else(|| Utc::now().with_timezone(&offset));
    let (condition, description, icon) = primary_condition(&parsed.weather);
    let sys = parsed.sys.unwrap_or_default();

    WeatherSnapshot {
        city: parsed.name,
        country: sys.country,
        observed_at,
        condition,
        description,
        icon,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        temp_min_c: parsed.main.temp_min,
        temp_max_c: parsed.main.temp_max,
        humidity_pct: parsed.main.humidity,
        pressure_hpa: parsed.main.pressure,
        wind_speed_mps: parsed.wind.speed,
        wind_direction_deg: parsed.wind.deg,
        visibility_m: parsed.visibility,
        cloud_cover_pct: parsed.clouds.map(|c| c.all),
        sunrise: sys.sunrise.and_then(|ts| local_time(ts, offset)),
        sunset: sys.sunset.and_then(|ts| local_time(ts, offset)),
    }
}

fn forecast_from(parsed: OwForecastResponse) -> Vec<ForecastEntry> {
    let offset = utc_offset(parsed.city.and_then(|c| c.timezone));

    parsed
        .list
        .into_iter()
        .filter_map(|entry| {
            let time = local_time(entry.dt, offset)?;
            let (condition, description, icon) = primary_condition(&entry.weather);
            Some(ForecastEntry {
                time,
                temperature_c: entry.main.temp,
                condition,
                description,
                icon,
            })
        })
        .collect()
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let parsed: OwCurrentResponse = self.fetch("weather", city).await?;
        Ok(snapshot_from(parsed))
    }

    #[instrument(skip(self))]
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        let parsed: OwForecastResponse = self.fetch("forecast", city).await?;
        let entries = forecast_from(parsed);
        debug!(entries = entries.len(), "Parsed OpenWeather forecast");
        Ok(entries)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
