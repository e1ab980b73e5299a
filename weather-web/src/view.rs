//! Flattening a [`Dashboard`] into the strings the page template prints.

use serde::Serialize;
use weather_core::{
    Dashboard,
    classify::{DEFAULT_BACKGROUND, accent_color_for},
    format,
};

use crate::chart::{ChartPoint, temperature_chart};

pub const NOT_FOUND_MESSAGE: &str = "City not found. Please enter a valid city name.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub label: &'static str,
    pub value: String,
}

impl Tile {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCard {
    pub day: String,
    pub date: String,
    pub icon_url: String,
    pub temperature: String,
    pub description: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub city: String,
    pub last_updated: String,
    pub icon_url: String,
    pub condition: String,
    pub description: String,
    pub primary: Vec<Tile>,
    pub secondary: Vec<Tile>,
    pub chart_svg: String,
    pub days: Vec<DayCard>,
}

/// Top-level template context.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    /// Value pre-filled in the search box.
    pub query: String,
    pub background_url: &'static str,
    pub error: Option<&'static str>,
    pub dashboard: Option<DashboardView>,
}

impl PageView {
    pub fn loaded(dashboard: &Dashboard) -> Self {
        Self {
            query: dashboard.city.clone(),
            background_url: dashboard.style.background_url,
            error: None,
            dashboard: Some(DashboardView::from(dashboard)),
        }
    }

    pub fn unavailable(query: &str) -> Self {
        Self {
            query: query.to_string(),
            background_url: DEFAULT_BACKGROUND,
            error: Some(NOT_FOUND_MESSAGE),
            dashboard: None,
        }
    }
}

impl From<&Dashboard> for DashboardView {
    fn from(d: &Dashboard) -> Self {
        let now = &d.current;

        let primary = vec![
            Tile::new("Temperature", format::temperature(now.temperature_c)),
            Tile::new("Humidity", format!("{}%", now.humidity_pct)),
            Tile::new("Wind Speed", format!("{:.1} m/s", now.wind_speed_mps)),
            Tile::new("Pressure", format!("{} hPa", now.pressure_hpa)),
        ];

        // Absent fields drop their tile.
        let secondary = [
            now.feels_like_c
                .map(|t| Tile::new("Feels Like", format::temperature(t))),
            now.temp_min_c
                .map(|t| Tile::new("Min Temp", format::temperature(t))),
            now.temp_max_c
                .map(|t| Tile::new("Max Temp", format::temperature(t))),
            now.sunrise
                .map(|t| Tile::new("Sunrise", format::clock_time(&t))),
            now.sunset
                .map(|t| Tile::new("Sunset", format::clock_time(&t))),
            now.visibility_m
                .map(|m| Tile::new("Visibility", format::visibility_km(m))),
            now.cloud_cover_pct
                .map(|c| Tile::new("Cloud Cover", format!("{c}%"))),
            now.wind_direction_deg
                .map(|deg| Tile::new("Wind Direction", format::wind_direction(deg))),
        ]
        .into_iter()
        .flatten()
        .collect();

        let points: Vec<ChartPoint> = d
            .hourly
            .iter()
            .map(|e| ChartPoint {
                label: format::hour_label(&e.time),
                value: e.temperature_c,
            })
            .collect();

        let days = d
            .daily
            .iter()
            .map(|s| DayCard {
                day: s.day.clone(),
                date: s.date.clone(),
                icon_url: format::icon_url(&s.icon),
                temperature: format::temperature(s.temperature_c),
                description: format::title_case(&s.description),
                color: accent_color_for(&s.condition),
            })
            .collect();

        Self {
            city: d.city.clone(),
            last_updated: format::long_timestamp(&now.observed_at),
            icon_url: format::icon_url(&now.icon),
            condition: now.condition.clone(),
            description: format::title_case(&now.description),
            primary,
            secondary,
            chart_svg: temperature_chart(&points),
            days,
        }
    }
}
