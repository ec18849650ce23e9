//! AggregateMembershipsHandler - Query handler for the creation-window report.

use chrono::NaiveDate;
use std::sync::Arc;

use super::active_records_filter;
use crate::domain::foundation::DateRange;
use crate::domain::membership::{MembershipGroup, ProductCatalog};
use crate::domain::statistics::{tally_created, MembershipAggregate, StatisticsError};
use crate::ports::MembershipRecordSource;

/// Query for active memberships created in `[from, to]`.
#[derive(Debug, Clone)]
pub struct AggregateMembershipsQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub member_type: Option<String>,
    /// Postcode counted as local in the union split.
    pub local_postcode: String,
}

/// Result type for the aggregate query.
pub type AggregateMembershipsResult = MembershipAggregate;

/// Handler for the per-category creation-window rollup.
pub struct AggregateMembershipsHandler {
    source: Arc<dyn MembershipRecordSource>,
    catalog: Arc<ProductCatalog>,
}

impl AggregateMembershipsHandler {
    pub fn new(source: Arc<dyn MembershipRecordSource>, catalog: Arc<ProductCatalog>) -> Self {
        Self { source, catalog }
    }

    pub async fn handle(
        &self,
        query: AggregateMembershipsQuery,
    ) -> Result<AggregateMembershipsResult, StatisticsError> {
        let range = DateRange::new(query.from, query.to)?;
        let filter = query
            .member_type
            .as_deref()
            .and_then(MembershipGroup::parse_filter);

        let records = self
            .source
            .fetch(&active_records_filter(filter, &self.catalog))
            .await?;

        let tally = tally_created(
            &records,
            &range,
            filter,
            &self.catalog,
            &query.local_postcode,
        );

        for malformed in &tally.malformed {
            tracing::warn!(
                record_id = %malformed.record_id,
                value = %malformed.value,
                "Skipping membership record with malformed creation date"
            );
        }

        tracing::debug!(
            %range,
            total = tally.aggregate.total,
            source = self.source.source_name(),
            "Aggregated memberships"
        );

        Ok(tally.aggregate)
    }
}
