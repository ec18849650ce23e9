//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, calendar helpers and error types
//! that form the vocabulary of the membership statistics domain.

mod calendar;
mod errors;
mod ids;

pub use calendar::{
    format_calendar_date, is_open_end, parse_calendar_date, parse_stored_datetime, DateRange,
    DayBounds, CALENDAR_DATE_FORMAT, STORED_DATETIME_FORMAT, ZERO_DATETIME,
};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{RecordId, UserId};
