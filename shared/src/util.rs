use chrono::NaiveDate;

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date as `YYYY-MM-DD` (UTC).
pub fn today_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Parse the date part of an ISO-8601 string.
///
/// Accepts both plain dates (`2024-01-15`) and full timestamps
/// (`2024-01-15T08:30:00.000Z`) by looking at the first ten characters only.
/// Returns `None` for anything shorter or malformed.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
