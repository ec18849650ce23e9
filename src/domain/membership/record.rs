//! Membership record: one row of the record store.
//!
//! Dates stay as the raw strings read from storage. Parsing happens at
//! evaluation time so a single malformed row can be excluded and reported
//! without failing the whole query.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::CategoryCode;
use crate::domain::foundation::{is_open_end, parse_stored_datetime, DayBounds, RecordId, UserId};

/// The only status that makes a record countable as active.
pub const ACTIVE_STATUS: &str = "active";

/// A membership record as read from the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub id: RecordId,
    pub user_id: Option<UserId>,
    pub category_code: CategoryCode,
    pub status: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub created_at: String,
    pub postcode: Option<String>,
}

/// Which date field of a record failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
    Created,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Start => "start_date",
            DateField::End => "end_date",
            DateField::Created => "created_at",
        }
    }
}

/// A record whose date field could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {record_id} has unparsable {} '{value}'", .field.as_str())]
pub struct MalformedRecord {
    pub record_id: RecordId,
    pub field: DateField,
    pub value: String,
}

/// Parsed validity window of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    pub start: NaiveDateTime,
    /// `None` means open-ended.
    pub end: Option<NaiveDateTime>,
}

impl ActivityWindow {
    /// Returns true if the window overlaps any part of the day.
    ///
    /// Start is compared against the last second of the day and end against
    /// the first, so a record starting and ending on the same day counts.
    pub fn overlaps_day(&self, day: DayBounds) -> bool {
        self.start <= day.end && self.end.map_or(true, |end| end >= day.start)
    }
}

impl MembershipRecord {
    /// Returns true if the status is exactly `"active"`.
    pub fn has_active_status(&self) -> bool {
        self.status == ACTIVE_STATUS
    }

    /// Parses the start and end dates.
    pub fn activity_window(&self) -> Result<ActivityWindow, MalformedRecord> {
        let start = parse_stored_datetime(&self.start_date)
            .ok_or_else(|| self.malformed(DateField::Start, &self.start_date))?;

        let end = if is_open_end(self.end_date.as_deref()) {
            None
        } else {
            let raw = self.end_date.as_deref().unwrap_or_default();
            Some(parse_stored_datetime(raw).ok_or_else(|| self.malformed(DateField::End, raw))?)
        };

        Ok(ActivityWindow { start, end })
    }

    /// Parses the creation instant.
    pub fn created_instant(&self) -> Result<NaiveDateTime, MalformedRecord> {
        parse_stored_datetime(&self.created_at)
            .ok_or_else(|| self.malformed(DateField::Created, &self.created_at))
    }

    /// Returns true if the record's postcode equals the reference postcode.
    pub fn is_in_postcode(&self, postcode: &str) -> bool {
        self.postcode
            .as_deref()
            .map_or(false, |p| p.trim() == postcode.trim())
    }

    fn malformed(&self, field: DateField, value: &str) -> MalformedRecord {
        MalformedRecord {
            record_id: self.id,
            field,
            value: value.to_string(),
        }
    }
}
