use chrono::{DateTime, Local, TimeZone, Utc};

/// Short date used on session cards, e.g. `May 2, 2:03 PM`, in local time.
#[must_use]
pub fn format_card_date(value: DateTime<Utc>) -> String {
    format_card_date_in(value, &Local)
}

/// Full date and time in local time.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    format_datetime_in(value, &Local)
}

fn format_card_date_in<Tz: TimeZone>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.with_timezone(tz).format("%b %-d, %-I:%M %p").to_string()
}

fn format_datetime_in<Tz: TimeZone>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.with_timezone(tz).format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Playback offset as shown next to timeline entries: `9.5s`, `14s`.
#[must_use]
pub fn format_seconds(value: f64) -> String {
    format!("{value}s")
}
