use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Source of "now" for age labels.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Bucketed age of a notification relative to a reference instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelativeAge {
    JustNow,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    /// A week or older; rendered as a calendar date.
    Date(DateTime<Utc>),
    /// The timestamp text could not be parsed and is shown verbatim.
    Unparsed(String),
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JustNow => f.write_str("Just now"),
            Self::Minutes(count) => write_ago(f, *count, "minute"),
            Self::Hours(count) => write_ago(f, *count, "hour"),
            Self::Days(count) => write_ago(f, *count, "day"),
            Self::Date(timestamp) => write!(f, "{}", timestamp.format("%-m/%-d/%Y")),
            Self::Unparsed(raw) => f.write_str(raw),
        }
    }
}

fn write_ago(f: &mut fmt::Formatter<'_>, count: u64, unit: &str) -> fmt::Result {
    let plural = if count == 1 { "" } else { "s" };
    write!(f, "{count} {unit}{plural} ago")
}

/// Parses the server's `created_at` text: RFC 3339, RFC 2822 (`Mon, 20 May
/// 2024 11:00:00 GMT`), naive date-times, or a bare date. Naive values are
/// taken as UTC; a bare date is UTC midnight.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| {
            NaiveDateTime::parse_from_str(trimmed, format)
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_ONLY_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

#[must_use]
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> RelativeAge {
    // Future timestamps come from clock skew between browser and server.
    let elapsed = now.signed_duration_since(created_at).num_seconds().max(0);

    if elapsed < SECONDS_PER_MINUTE {
        RelativeAge::JustNow
    } else if elapsed < SECONDS_PER_HOUR {
        RelativeAge::Minutes((elapsed / SECONDS_PER_MINUTE) as u64)
    } else if elapsed < SECONDS_PER_DAY {
        RelativeAge::Hours((elapsed / SECONDS_PER_HOUR) as u64)
    } else if elapsed < SECONDS_PER_WEEK {
        RelativeAge::Days((elapsed / SECONDS_PER_DAY) as u64)
    } else {
        RelativeAge::Date(created_at)
    }
}

/// Maps the raw `created_at` text to a bucketed label relative to `now`.
#[must_use]
pub fn format_relative_age(raw: &str, now: DateTime<Utc>) -> RelativeAge {
    match parse_timestamp(raw) {
        Some(created_at) => relative_age(created_at, now),
        None => RelativeAge::Unparsed(raw.to_string()),
    }
}
