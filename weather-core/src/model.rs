use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Current conditions for a city, with timestamps in the city's local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: Option<String>,
    pub observed_at: DateTime<FixedOffset>,
    /// Short category such as "Rain" or "Clear".
    pub condition: String,
    pub description: String,
    pub icon: String,
    pub temperature_c: f64,
    pub feels_like_c: Option<f64>,
    pub temp_min_c: Option<f64>,
    pub temp_max_c: Option<f64>,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub wind_direction_deg: Option<f64>,
    pub visibility_m: Option<u32>,
    pub cloud_cover_pct: Option<u8>,
    pub sunrise: Option<DateTime<FixedOffset>>,
    pub sunset: Option<DateTime<FixedOffset>>,
}

/// One 3-hour slot of the forecast feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub time: DateTime<FixedOffset>,
    pub temperature_c: f64,
    pub condition: String,
    pub description: String,
    pub icon: String,
}

/// The representative forecast for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastSummary {
    /// Abbreviated weekday, e.g. "Mon".
    pub day: String,
    /// Month and day, e.g. "Mar 04".
    pub date: String,
    pub temperature_c: f64,
    pub condition: String,
    pub description: String,
    pub icon: String,
}

/// Visual treatment derived from a condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConditionStyle {
    pub background_url: &'static str,
    pub accent_color: &'static str,
}

/// Everything needed to render one dashboard page.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// City as requested by the user.
    pub city: String,
    pub current: WeatherSnapshot,
    pub style: ConditionStyle,
    pub hourly: Vec<ForecastEntry>,
    pub daily: Vec<DailyForecastSummary>,
}
