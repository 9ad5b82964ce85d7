use chrono::{DateTime, NaiveDateTime, Utc};

/// Timestamp layout used by the bug tracker's XML-RPC interface
const COMPACT_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H:%M:%S";

/// Parses a bug-tracker timestamp.
///
/// Accepts the compact `YYYYMMDDTHH:MM:SS` form (interpreted as UTC) and
/// RFC 3339, which the REST interface emits.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, COMPACT_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
}

/// Renders the age of `raw` relative to `now`, e.g. `3 days ago`.
///
/// Unparseable input is returned verbatim. Timestamps in the future
/// render as `just now`.
pub fn relative_age(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(timestamp) => format_age(now.signed_duration_since(timestamp).num_seconds()),
        None => raw.to_string(),
    }
}

fn format_age(seconds: i64) -> String {
    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;
    const MONTH: i64 = 30 * DAY;
    const YEAR: i64 = 365 * DAY;

    let (count, unit) = match seconds {
        s if s < MINUTE => return "just now".to_string(),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < MONTH => (s / DAY, "day"),
        s if s < YEAR => (s / MONTH, "month"),
        s => (s / YEAR, "year"),
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
