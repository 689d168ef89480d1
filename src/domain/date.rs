//! Entry date parsing

use crate::error::{DiaryError, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Parse a user-supplied entry date relative to `now`.
///
/// Accepts `now`/`today`, `yesterday`, `YYYY-MM-DD` (midnight UTC) and
/// RFC 3339 timestamps. `today` and `yesterday` keep the time of day of `now`.
pub fn parse_entry_date(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let normalized = input.trim().to_lowercase();

    match normalized.as_str() {
        "now" | "today" => Ok(now),
        "yesterday" => Ok(now - Duration::days(1)),
        _ => {
            if let Ok(timestamp) = DateTime::parse_from_rfc3339(input.trim()) {
                return Ok(timestamp.with_timezone(&Utc));
            }

            NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
                .ok_or_else(|| DiaryError::InvalidDate(input.to_string()))
        }
    }
}
