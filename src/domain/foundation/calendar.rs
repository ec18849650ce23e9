//! Calendar value objects: whole days, inclusive date ranges and the
//! stored `YYYY-MM-DD HH:MM:SS` datetime format.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::fmt;

use super::ValidationError;

/// Format used for every datetime column in the record store.
pub const STORED_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used for calendar dates (request parameters, chart labels).
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Zero-date written by the store for "no end date".
pub const ZERO_DATETIME: &str = "0000-00-00 00:00:00";

/// Parses a stored datetime string.
///
/// Accepts the full `YYYY-MM-DD HH:MM:SS` form and a bare `YYYY-MM-DD`
/// (read as midnight). Returns `None` for anything else.
pub fn parse_stored_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, STORED_DATETIME_FORMAT) {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, CALENDAR_DATE_FORMAT)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Returns true if a stored end date means "open-ended".
pub fn is_open_end(raw: Option<&str>) -> bool {
    match raw.map(str::trim) {
        None => true,
        Some(s) => s.is_empty() || s == ZERO_DATETIME,
    }
}

/// Parses a `YYYY-MM-DD` calendar date supplied by a caller.
pub fn parse_calendar_date(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), CALENDAR_DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_format(field, format!("expected YYYY-MM-DD, got '{}'", raw)))
}

/// Formats a calendar date as `YYYY-MM-DD`.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(CALENDAR_DATE_FORMAT).to_string()
}

/// First and last second of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayBounds {
    /// Bounds of `date`: `00:00:00` through `23:59:59`.
    pub fn of(date: NaiveDate) -> Self {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        Self {
            start: date.and_time(NaiveTime::MIN),
            end: date.and_time(end_of_day),
        }
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `from > to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, ValidationError> {
        if from > to {
            return Err(ValidationError::inverted_range(from, to));
        }
        Ok(Self { from, to })
    }

    /// Parses a range from two `YYYY-MM-DD` strings.
    pub fn parse(from: &str, to: &str) -> Result<Self, ValidationError> {
        Self::new(
            parse_calendar_date("from_date", from)?,
            parse_calendar_date("to_date", to)?,
        )
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Number of days between the endpoints (0 for a single day).
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    /// First second of `from` and last second of `to`.
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        (DayBounds::of(self.from).start, DayBounds::of(self.to).end)
    }

    /// Returns true if the instant falls inside the range (whole days).
    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        let (start, end) = self.bounds();
        instant >= start && instant <= end
    }

    /// Returns true if the day falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Day `offset` days after `from`.
    pub fn nth_day(&self, offset: i64) -> NaiveDate {
        self.from + Duration::days(offset)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={}",
            format_calendar_date(self.from),
            format_calendar_date(self.to)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, CALENDAR_DATE_FORMAT).unwrap()
    }

    #[test]
    fn parses_full_stored_datetime() {
        let dt = parse_stored_datetime("2024-03-05 14:30:00").unwrap();
        assert_eq!(dt.to_string(), "2024-03-05 14:30:00");
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let dt = parse_stored_datetime("2024-03-05").unwrap();
        assert_eq!(dt, date("2024-03-05").and_time(NaiveTime::MIN));
    }

    #[test]
    fn rejects_garbage_and_zero_date() {
        assert!(parse_stored_datetime("not a date").is_none());
        assert!(parse_stored_datetime("2024-13-40 00:00:00").is_none());
        assert!(parse_stored_datetime(ZERO_DATETIME).is_none());
        assert!(parse_stored_datetime("").is_none());
    }

    #[test]
    fn open_end_sentinels() {
        assert!(is_open_end(None));
        assert!(is_open_end(Some("")));
        assert!(is_open_end(Some("  ")));
        assert!(is_open_end(Some(ZERO_DATETIME)));
        assert!(!is_open_end(Some("2024-06-30 00:00:00")));
        assert!(!is_open_end(Some("garbage")));
    }

    #[test]
    fn day_bounds_cover_whole_day() {
        let bounds = DayBounds::of(date("2024-06-30"));
        assert_eq!(bounds.start.to_string(), "2024-06-30 00:00:00");
        assert_eq!(bounds.end.to_string(), "2024-06-30 23:59:59");
    }

    #[test]
    fn range_rejects_inverted_endpoints() {
        assert!(DateRange::new(date("2024-02-01"), date("2024-01-01")).is_err());
    }

    #[test]
    fn range_span_and_containment() {
        let range = DateRange::parse("2023-01-01", "2024-02-04").unwrap();
        assert_eq!(range.span_days(), 399);
        assert!(range.contains(date("2023-06-01")));
        assert!(!range.contains(date("2024-02-05")));
        assert!(range.contains_instant(
            parse_stored_datetime("2024-02-04 23:59:59").unwrap()
        ));
    }

    #[test]
    fn parse_calendar_date_reports_field() {
        let err = parse_calendar_date("to_date", "04/02/2024").unwrap_err();
        assert!(err.to_string().contains("to_date"));
    }
}
