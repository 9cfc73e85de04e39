//! Conversions between UTC instants and `<input type="datetime-local">` text.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse datetime-local text in `tz`. Ambiguous local times (DST fold) take
/// the earlier instant; nonexistent ones are rejected.
pub fn parse_local_input<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), INPUT_FORMAT).ok()?;
    tz.from_local_datetime(&naive).earliest().map(|dt| dt.with_timezone(&Utc))
}

/// Format an instant for a datetime-local input in `tz`.
pub fn format_local_input<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format(INPUT_FORMAT).to_string()
}

/// `"Mar 5, 9:30 AM"` in `tz`.
pub fn short_label<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format("%b %-d, %-I:%M %p").to_string()
}
