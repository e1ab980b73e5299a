//! Plain-text rendering of a dashboard for the terminal.

use weather_core::{Dashboard, format};
use weather_web::view::{DashboardView, Tile};

fn write_tiles(out: &mut String, tiles: &[Tile]) {
    let width = tiles.iter().map(|t| t.label.len()).max().unwrap_or(0);
    for tile in tiles {
        out.push_str(&format!("  {:<width$}  {}\n", tile.label, tile.value));
    }
}

pub fn dashboard_text(dashboard: &Dashboard) -> String {
    let view = DashboardView::from(dashboard);
    let mut out = String::new();

    out.push_str(&format!("Current Weather in {}\n", view.city));
    out.push_str(&format!("Last Updated: {}\n", view.last_updated));
    out.push_str(&format!("{}: {}\n", view.condition, view.description));
    out.push('\n');

    write_tiles(&mut out, &view.primary);
    if !view.secondary.is_empty() {
        out.push('\n');
        write_tiles(&mut out, &view.secondary);
    }

    out.push_str("\n24-Hour Temperature Forecast\n");
    if dashboard.hourly.is_empty() {
        out.push_str("  (no data)\n");
    }
    for entry in &dashboard.hourly {
        out.push_str(&format!(
            "  {}  {:>8}  {}\n",
            format::hour_label(&entry.time),
            format::temperature(entry.temperature_c),
            entry.condition
        ));
    }

    out.push_str("\n5-Day Forecast\n");
    if view.days.is_empty() {
        out.push_str("  (no data)\n");
    }
    for day in &view.days {
        out.push_str(&format!(
            "  {} {}  {:>8}  {}\n",
            day.day, day.date, day.temperature, day.description
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset, TimeZone};
    use weather_core::{ForecastEntry, WeatherSnapshot};

    fn dashboard(entries: i64) -> Dashboard {
        let tz = FixedOffset::east_opt(0).unwrap();
        let start = tz.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
        let current = WeatherSnapshot {
            city: "Sangli".to_string(),
            country: None,
            observed_at: start,
            condition: "Rain".to_string(),
            description: "light rain".to_string(),
            icon: "10d".to_string(),
            temperature_c: 22.0,
            feels_like_c: None,
            temp_min_c: None,
            temp_max_c: None,
            humidity_pct: 80,
            pressure_hpa: 1005,
            wind_speed_mps: 4.0,
            wind_direction_deg: Some(180.0),
            visibility_m: None,
            cloud_cover_pct: None,
            sunrise: None,
            sunset: None,
        };
        let forecast: Vec<_> = (0..entries)
            .map(|i| ForecastEntry {
                time: start + Duration::hours(3 * i),
                temperature_c: 20.0 + i as f64,
                condition: "Rain".to_string(),
                description: "moderate rain".to_string(),
                icon: "10d".to_string(),
            })
            .collect();
        Dashboard::assemble("Sangli", current, &forecast)
    }

    #[test]
    fn renders_all_sections() {
        let text = dashboard_text(&dashboard(40));

        assert!(text.starts_with("Current Weather in Sangli\n"));
        assert!(text.contains("Rain: Light Rain"));
        assert!(text.contains("Pressure"));
        assert!(text.contains("180° (S)"));
        assert!(text.contains("12 AM    20.0°C  Rain"));
        assert!(text.contains("Mon Mar 04"));
        assert!(text.contains("Moderate Rain"));
    }

    #[test]
    fn lists_eight_hourly_rows_and_five_days() {
        let text = dashboard_text(&dashboard(40));

        let hourly = text
            .split("24-Hour Temperature Forecast\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();
        assert_eq!(hourly.lines().count(), 8);

        let days = text.split("5-Day Forecast\n").nth(1).unwrap();
        assert_eq!(days.lines().count(), 5);
    }

    #[test]
    fn empty_forecast_is_marked() {
        let text = dashboard_text(&dashboard(0));
        assert_eq!(text.matches("(no data)").count(), 2);
    }
}
