//! Display helpers shared by the HTML and terminal renderers.

use chrono::{DateTime, FixedOffset};

/// Eight compass points plus a trailing "N" so that rounding 337.5°..360°
/// up to index 8 still lands on north.
///
/// Exact half-way bearings (22.5°, 67.5°, ...) round to the even index.
pub const COMPASS_POINTS: [&str; 9] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW", "N"];

const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Compass label for a wind bearing in degrees.
pub fn compass_label(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = (normalized / 45.0).round_ties_even() as usize;
    COMPASS_POINTS[index.min(COMPASS_POINTS.len() - 1)]
}

/// Large icon URL on the provider's static host.
pub fn icon_url(icon: &str) -> String {
    format!("{ICON_BASE_URL}/{icon}@4x.png")
}

pub fn temperature(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}

/// "Monday, Mar 04, 2024 01:30 PM"
pub fn long_timestamp(time: &DateTime<FixedOffset>) -> String {
    time.format("%A, %b %d, %Y %I:%M %p").to_string()
}

/// "06:12 AM"
pub fn clock_time(time: &DateTime<FixedOffset>) -> String {
    time.format("%I:%M %p").to_string()
}

/// "03 PM", used on the chart axis.
pub fn hour_label(time: &DateTime<FixedOffset>) -> String {
    time.format("%I %p").to_string()
}

pub fn visibility_km(metres: u32) -> String {
    format!("{:.1} km", f64::from(metres) / 1000.0)
}

/// "225° (SW)"
pub fn wind_direction(degrees: f64) -> String {
    format!("{degrees}° ({})", compass_label(degrees))
}

/// Capitalizes the first letter of every word: "light rain" → "Light Rain".
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn compass_cardinal_points() {
        assert_eq!(compass_label(0.0), "N");
        assert_eq!(compass_label(45.0), "NE");
        assert_eq!(compass_label(90.0), "E");
        assert_eq!(compass_label(180.0), "S");
        assert_eq!(compass_label(270.0), "W");
    }

    #[test]
    fn compass_wraps_to_north_at_the_top() {
        assert_eq!(compass_label(337.6), "N");
        assert_eq!(compass_label(359.9), "N");
        assert_eq!(compass_label(360.0), "N");
    }

    #[test]
    fn compass_rounds_to_nearest_point() {
        assert_eq!(compass_label(22.4), "N");
        assert_eq!(compass_label(22.6), "NE");
        assert_eq!(compass_label(337.4), "NW");
    }

    #[test]
    fn compass_half_way_bearings_round_to_even() {
        assert_eq!(compass_label(22.5), "N");
        assert_eq!(compass_label(67.5), "E");
        assert_eq!(compass_label(112.5), "E");
        assert_eq!(compass_label(157.5), "S");
        assert_eq!(compass_label(202.5), "S");
        assert_eq!(compass_label(292.5), "W");
        assert_eq!(compass_label(337.5), "N");
    }

    #[test]
    fn compass_normalizes_out_of_range_bearings() {
        assert_eq!(compass_label(-90.0), "W");
        assert_eq!(compass_label(405.0), "NE");
    }

    #[test]
    fn wind_direction_includes_degrees_and_label() {
        assert_eq!(wind_direction(225.0), "225° (SW)");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("overcast CLOUDS"), "Overcast Clouds");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn numeric_formats() {
        assert_eq!(temperature(21.456), "21.5°C");
        assert_eq!(visibility_km(10_000), "10.0 km");
        assert_eq!(icon_url("01d"), "https://openweathermap.org/img/wn/01d@4x.png");
    }

    #[test]
    fn time_formats() {
        let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let time = tz.with_ymd_and_hms(2024, 3, 4, 13, 5, 0).unwrap();

        assert_eq!(long_timestamp(&time), "Monday, Mar 04, 2024 01:05 PM");
        assert_eq!(clock_time(&time), "01:05 PM");
        assert_eq!(hour_label(&time), "01 PM");
    }
}
