use crate::{CoreError, Result as CoreErrorResult};

use chrono::NaiveDate;

/// Parse a submitted date.
///
/// Accepts `YYYY-MM-DD`, and the coarser `YYYY-MM` and `YYYY` forms which
/// resolve to the first day of that month or year.
#[track_caller]
pub fn parse_date(field: &str, input: &str) -> CoreErrorResult<NaiveDate> {
    let value = input.trim();
    if value.is_empty() {
        return Err(CoreError::validation(field, format!("{field} is required")));
    }

    // Four-digit year first; no sign
    let unsigned_year = value.len() >= 4 && value.bytes().take(4).all(|b| b.is_ascii_digit());

    let parsed = match value.len() {
        _ if !unsigned_year => None,
        4 => value
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        7 => NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
    };

    match parsed {
        Some(date) => Ok(date),
        None => Err(CoreError::validation(
            field,
            format!("{field} must be a date (YYYY-MM-DD), got '{value}'"),
        )),
    }
}
