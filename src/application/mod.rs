//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers read the membership record store; the snapshot command
//! is the only writer, and it writes to snapshot storage only.

pub mod handlers;
mod statistics_handlers;

pub use handlers::statistics::{
    AggregateMembershipsHandler, AggregateMembershipsQuery, BuildActiveSeriesHandler,
    BuildActiveSeriesQuery, CountActiveMembersHandler, CountActiveMembersQuery,
    CountRecordsHandler, CountRecordsQuery, GetMembershipGrowthHandler, GetMembershipGrowthQuery,
    RecordDailySnapshotCommand, RecordDailySnapshotHandler,
};
pub use statistics_handlers::{select_record_source, StatisticsHandlers};
