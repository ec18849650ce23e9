//! Membership statistics domain.
//!
//! Pure computations over membership records. Nothing here performs I/O;
//! application handlers fetch records through ports and feed them in.
//!
//! # Module Organization
//!
//! - `census` - Point-in-time active census for one day
//! - `sampling` - Sample-point selection for time series
//! - `series` - Chart-ready active series
//! - `aggregate` - Creation-window rollup by group and renewal mode
//! - `growth` - Daily snapshots bucketed into growth periods

mod aggregate;
mod census;
mod counts;
mod errors;
mod growth;
mod sampling;
mod series;

pub use aggregate::{tally_created, AggregateTally, MembershipAggregate, PostcodeSplit, RenewalSplit};
pub use census::{tally_active, CensusTally};
pub use counts::ActiveCounts;
pub use errors::StatisticsError;
pub use growth::{DailySnapshot, GrowthBucket, GrowthPeriod, MembershipGrowth};
pub use sampling::{
    SamplingMode, SamplingPlan, DAILY_SPAN_LIMIT, THIRD_DAY_SPAN_LIMIT, WEEKLY_SPAN_LIMIT,
};
pub use series::{ActiveSeries, SeriesData};
