//! Handler bundle for the statistics surface.

use chrono::NaiveDate;
use std::sync::Arc;

use super::handlers::statistics::{
    AggregateMembershipsHandler, AggregateMembershipsQuery, AggregateMembershipsResult,
    BuildActiveSeriesHandler, CountActiveMembersHandler, CountRecordsHandler,
    GetMembershipGrowthHandler, RecordDailySnapshotHandler,
};
use crate::adapters::membership::OrderDerivedRecordSource;
use crate::config::{RecordSourceKind, StatisticsConfig};
use crate::domain::membership::ProductCatalog;
use crate::domain::statistics::StatisticsError;
use crate::ports::{CommerceOrderReader, DailySnapshotRepository, MembershipRecordSource};

/// Picks the record store configured for this deployment.
///
/// `orders` is only consulted for `commerce_orders`.
pub fn select_record_source(
    kind: RecordSourceKind,
    metadata_table: Arc<dyn MembershipRecordSource>,
    orders: Arc<dyn CommerceOrderReader>,
    catalog: Arc<ProductCatalog>,
) -> Arc<dyn MembershipRecordSource> {
    match kind {
        RecordSourceKind::MetadataTable => metadata_table,
        RecordSourceKind::CommerceOrders => Arc::new(OrderDerivedRecordSource::new(orders, catalog)),
    }
}

#[derive(Clone)]
pub struct StatisticsHandlers {
    pub count_active: Arc<CountActiveMembersHandler>,
    pub series: Arc<BuildActiveSeriesHandler>,
    pub aggregate: Arc<AggregateMembershipsHandler>,
    pub count_records: Arc<CountRecordsHandler>,
    pub record_snapshot: Arc<RecordDailySnapshotHandler>,
    pub growth: Arc<GetMembershipGrowthHandler>,
    local_postcode: String,
}

impl StatisticsHandlers {
    pub fn new(
        config: &StatisticsConfig,
        catalog: Arc<ProductCatalog>,
        source: Arc<dyn MembershipRecordSource>,
        snapshots: Arc<dyn DailySnapshotRepository>,
    ) -> Self {
        tracing::debug!(
            source = source.source_name(),
            sampling = ?config.sampling,
            "Wiring statistics handlers"
        );

        Self {
            count_active: Arc::new(CountActiveMembersHandler::new(
                source.clone(),
                catalog.clone(),
            )),
            series: Arc::new(BuildActiveSeriesHandler::new(
                source.clone(),
                catalog.clone(),
                config.sampling,
            )),
            aggregate: Arc::new(AggregateMembershipsHandler::new(
                source.clone(),
                catalog.clone(),
            )),
            count_records: Arc::new(CountRecordsHandler::new(source.clone())),
            record_snapshot: Arc::new(RecordDailySnapshotHandler::new(
                source,
                catalog,
                snapshots.clone(),
            )),
            growth: Arc::new(GetMembershipGrowthHandler::new(snapshots)),
            local_postcode: config.local_postcode.clone(),
        }
    }

    /// Configured postcode counted as local in the union split.
    pub fn local_postcode(&self) -> &str {
        &self.local_postcode
    }

    /// Runs the aggregate report with the configured local postcode.
    pub async fn aggregate_with_configured_postcode(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        member_type: Option<String>,
    ) -> Result<AggregateMembershipsResult, StatisticsError> {
        self.aggregate
            .handle(AggregateMembershipsQuery {
                from,
                to,
                member_type,
                local_postcode: self.local_postcode.clone(),
            })
            .await
    }
}
