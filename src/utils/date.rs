use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate};

/// Today's date on the local calendar (not UTC).
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `--date` value, `today`/`yesterday`/`tomorrow`, or today when absent.
pub fn resolve_date(input: Option<&str>) -> AppResult<NaiveDate> {
    let Some(raw) = input else {
        return Ok(today());
    };

    match raw.trim().to_lowercase().as_str() {
        "today" => Ok(today()),
        "yesterday" => Ok(shift(today(), -1)),
        "tomorrow" => Ok(shift(today(), 1)),
        _ => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
    }
}

/// Previous/next day navigation.
pub fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}
