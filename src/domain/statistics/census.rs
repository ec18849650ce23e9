//! Point-in-time census: which records were active on a given day.

use chrono::NaiveDate;

use super::ActiveCounts;
use crate::domain::foundation::DayBounds;
use crate::domain::membership::{MalformedRecord, MembershipGroup, MembershipRecord, ProductCatalog};

/// Result of evaluating a set of records against one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CensusTally {
    pub counts: ActiveCounts,
    /// Active-status candidates excluded because a date did not parse.
    pub malformed: Vec<MalformedRecord>,
}

/// Counts records active on `date`.
///
/// A record counts when its status is exactly `"active"`, its window
/// overlaps the day and, with a group filter, its code belongs to that
/// group. Without a filter every record is a candidate, including unknown
/// codes (they land in `total` only). With a filter `total` equals the
/// filtered bucket.
pub fn tally_active<'a, I>(
    records: I,
    date: NaiveDate,
    filter: Option<MembershipGroup>,
    catalog: &ProductCatalog,
) -> CensusTally
where
    I: IntoIterator<Item = &'a MembershipRecord>,
{
    let day = DayBounds::of(date);
    let mut tally = CensusTally::default();

    for record in records {
        if !record.has_active_status() {
            continue;
        }

        let group = catalog.group_of(record.category_code);
        if filter.is_some() && group != filter {
            continue;
        }

        match record.activity_window() {
            Ok(window) if window.overlaps_day(day) => tally.counts.record(group),
            Ok(_) => {}
            Err(malformed) => tally.malformed.push(malformed),
        }
    }

    tally
}

#[cfg(test)]
#[path = "census_test.rs"]
mod census_test;
