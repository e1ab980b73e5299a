//! Condition category → background image / accent color.
//!
//! Both tables are scanned in declared order and the first key contained in
//! the condition string wins. The order is part of the contract: do not sort.

use crate::model::ConditionStyle;

macro_rules! unsplash {
    ($id:literal) => {
        concat!(
            "https://images.unsplash.com/photo-",
            $id,
            "?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80"
        )
    };
}

pub static BACKGROUNDS: &[(&str, &str)] = &[
    ("Clear", unsplash!("1470252649378-9c29740c9fa8")),
    ("Clouds", unsplash!("1534088568595-a066f410bcda")),
    ("Rain", unsplash!("1519692933481-e162a57d6721")),
    ("Drizzle", unsplash!("1508873699372-7aeab60b44ab")),
    ("Thunderstorm", unsplash!("1605727216801-e27ce1d0cc28")),
    ("Snow", unsplash!("1491002052546-bf38f186af56")),
    ("Mist", unsplash!("1543968996-ee822b8176ba")),
    ("Fog", unsplash!("1487621167305-5d248087c724")),
    ("Haze", unsplash!("1533757704860-f673d3e1bc57")),
    ("Dust", unsplash!("1584036561566-baf8f5f1b144")),
];

pub const DEFAULT_BACKGROUND: &str = unsplash!("1429734956993-8a9b0555e122");

pub static ACCENT_COLORS: &[(&str, &str)] = &[
    ("Clear", "#FFC107"),
    ("Clouds", "#90A4AE"),
    ("Rain", "#2196F3"),
    ("Drizzle", "#64B5F6"),
    ("Thunderstorm", "#5C6BC0"),
    ("Snow", "#E1F5FE"),
    ("Mist", "#B0BEC5"),
    ("Fog", "#CFD8DC"),
    ("Haze", "#ECEFF1"),
];

pub const DEFAULT_ACCENT_COLOR: &str = "#78909C";

fn first_match(
    table: &'static [(&'static str, &'static str)],
    condition: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| condition.contains(key))
        .map(|(_, value)| *value)
}

/// Background image for a condition, falling back to the default image.
pub fn background_for(condition: &str) -> &'static str {
    first_match(BACKGROUNDS, condition).unwrap_or(DEFAULT_BACKGROUND)
}

/// Accent color for a condition, falling back to blue grey.
pub fn accent_color_for(condition: &str) -> &'static str {
    first_match(ACCENT_COLORS, condition).unwrap_or(DEFAULT_ACCENT_COLOR)
}

/// Both lookups at once. The two tables are independent and may disagree.
pub fn condition_style(condition: &str) -> ConditionStyle {
    ConditionStyle {
        background_url: background_for(condition),
        accent_color: accent_color_for(condition),
    }
}

impl Default for ConditionStyle {
    fn default() -> Self {
        Self {
            background_url: DEFAULT_BACKGROUND,
            accent_color: DEFAULT_ACCENT_COLOR,
        }
    }
}
