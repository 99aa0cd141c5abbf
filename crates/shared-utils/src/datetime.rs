//! Date and time display helpers
//!
//! Times render in 24-hour format and dates as day/month/year, matching
//! how riders and drivers in the region read them.

use chrono::{DateTime, TimeZone, Utc};

/// Format a time as `HH:MM` (24-hour)
pub fn format_time<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format("%H:%M").to_string()
}

/// Format a date as `DD/MM/YYYY`
pub fn format_date<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format("%d/%m/%Y").to_string()
}

/// Describe how long ago a moment was, relative to now
///
/// Within the last week this yields `Just now`, `5m ago`, `3h ago`, or
/// `2d ago`; anything older falls back to the full date.
pub fn time_ago(datetime: &DateTime<Utc>) -> String {
    time_ago_from(datetime, &Utc::now())
}

/// Like [`time_ago`], but relative to an explicit reference point
pub fn time_ago_from(datetime: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = (*now - *datetime).num_seconds();

    if seconds < 60 {
        "Just now".to_string()
    } else if seconds < 3_600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h ago", seconds / 3_600)
    } else if seconds < 604_800 {
        format!("{}d ago", seconds / 86_400)
    } else {
        format_date(datetime)
    }
}
