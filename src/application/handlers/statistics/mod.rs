//! Statistics handlers.
//!
//! ## Queries
//! - Count active members on a date
//! - Build an active-member series over a date range
//! - Aggregate memberships created in a date range
//! - Count raw records in the store
//! - Get membership growth from recorded snapshots
//!
//! ## Commands
//! - Record the daily census snapshot

mod aggregate_memberships;
mod build_active_series;
mod count_active_members;
mod count_records;
mod get_membership_growth;
mod record_daily_snapshot;

pub use aggregate_memberships::{
    AggregateMembershipsHandler, AggregateMembershipsQuery, AggregateMembershipsResult,
};
pub use build_active_series::{
    BuildActiveSeriesHandler, BuildActiveSeriesQuery, BuildActiveSeriesResult,
};
pub use count_active_members::{
    CountActiveMembersHandler, CountActiveMembersQuery, CountActiveMembersResult,
};
pub use count_records::{CountRecordsHandler, CountRecordsQuery, CountRecordsResult};
pub use get_membership_growth::{
    GetMembershipGrowthHandler, GetMembershipGrowthQuery, GetMembershipGrowthResult,
};
pub use record_daily_snapshot::{
    RecordDailySnapshotCommand, RecordDailySnapshotHandler, RecordDailySnapshotResult,
};

use crate::domain::membership::{MembershipGroup, ProductCatalog};
use crate::ports::RecordFilter;

/// Store-side filter for active records, narrowed to one group's codes.
fn active_records_filter(group: Option<MembershipGroup>, catalog: &ProductCatalog) -> RecordFilter {
    match group {
        Some(group) => RecordFilter::active().with_codes(catalog.codes_for(group).to_vec()),
        None => RecordFilter::active(),
    }
}
