//! Reduction of the 3-hour forecast feed into the chart series and day cards.

use std::collections::HashSet;

use chrono::Timelike;

use crate::model::{DailyForecastSummary, ForecastEntry};

/// Number of 3-hour slots covering the next 24 hours.
pub const HOURLY_SLOTS: usize = 8;
/// Upper bound on the number of day cards.
pub const MAX_DAYS: usize = 5;
/// Entries whose local hour is within this many hours of noon may represent their day.
pub const NOON_WINDOW_HOURS: u32 = 3;

/// The next 24 hours: the first [`HOURLY_SLOTS`] entries, or all of them when fewer exist.
pub fn hourly_series(entries: &[ForecastEntry]) -> &[ForecastEntry] {
    &entries[..entries.len().min(HOURLY_SLOTS)]
}

/// One summary per calendar day, taken from the earliest entry whose local
/// hour lies in 09..=15. Only the hour is compared, so 15:30 in a half-hour
/// zone still qualifies. Days without such an entry are skipped.
///
/// Entries are expected in chronological order and are not re-sorted.
pub fn daily_summaries(entries: &[ForecastEntry]) -> Vec<DailyForecastSummary> {
    let mut seen_days = HashSet::new();
    let mut summaries = Vec::with_capacity(MAX_DAYS);

    for entry in entries {
        if summaries.len() >= MAX_DAYS {
            break;
        }

        let day = entry.time.date_naive();
        if seen_days.contains(&day) || !is_near_noon(entry.time.hour()) {
            continue;
        }

        seen_days.insert(day);
        summaries.push(DailyForecastSummary {
            day: entry.time.format("%a").to_string(),
            date: entry.time.format("%b %d").to_string(),
            temperature_c: entry.temperature_c,
            condition: entry.condition.clone(),
            description: entry.description.clone(),
            icon: entry.icon.clone(),
        });
    }

    summaries
}

fn is_near_noon(hour: u32) -> bool {
    hour.abs_diff(12) <= NOON_WINDOW_HOURS
}
