//! "Posted N days ago" labels

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Label shown when a posting date cannot be parsed
pub const UNKNOWN_POSTED_LABEL: &str = "Recently";

/// Parse a posting date sent by the backend.
///
/// Accepts RFC 3339 timestamps, naive timestamps with a `T` or space
/// separator (read as UTC) and plain `YYYY-MM-DD` dates (read as UTC midnight).
pub fn parse_posted_date(posted: &str) -> Option<DateTime<Utc>> {
    let posted = posted.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(posted) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(posted, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(posted, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole days between `posted` and `now`, rounded up.
///
/// The distance is absolute, so a date in the future counts the same as one
/// in the past.
pub fn elapsed_days(posted: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (now - posted).num_milliseconds().abs();
    (ms + MS_PER_DAY - 1) / MS_PER_DAY
}

/// Relative label for a posting date, evaluated at `now`
pub fn format_posted_date(posted: &str, now: DateTime<Utc>) -> String {
    let Some(posted) = parse_posted_date(posted) else {
        return UNKNOWN_POSTED_LABEL.to_string();
    };

    let days = elapsed_days(posted, now);
    if days == 1 {
        "1 day ago".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else {
        format!("{} months ago", days / 30)
    }
}

/// Relative label for a posting date, evaluated at the current wall-clock time
pub fn posted_ago(posted: &str) -> String {
    format_posted_date(posted, Utc::now())
}
