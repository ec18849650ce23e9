//! GetMembershipGrowthHandler - Query handler for growth over recorded snapshots.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::foundation::DateRange;
use crate::domain::statistics::{GrowthPeriod, MembershipGrowth, StatisticsError};
use crate::ports::DailySnapshotRepository;

#[derive(Debug, Clone)]
pub struct GetMembershipGrowthQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub period: GrowthPeriod,
}

pub type GetMembershipGrowthResult = MembershipGrowth;

/// Handler that buckets stored snapshots into growth periods.
///
/// Days without a snapshot are simply absent; nothing is recomputed.
pub struct GetMembershipGrowthHandler {
    snapshots: Arc<dyn DailySnapshotRepository>,
}

impl GetMembershipGrowthHandler {
    pub fn new(snapshots: Arc<dyn DailySnapshotRepository>) -> Self {
        Self { snapshots }
    }

    pub async fn handle(
        &self,
        query: GetMembershipGrowthQuery,
    ) -> Result<GetMembershipGrowthResult, StatisticsError> {
        let range = DateRange::new(query.from, query.to)?;
        let snapshots = self.snapshots.list_between(&range).await?;

        tracing::debug!(
            %range,
            period = %query.period,
            snapshots = snapshots.len(),
            "Building membership growth"
        );

        Ok(MembershipGrowth::from_snapshots(query.period, snapshots))
    }
}
