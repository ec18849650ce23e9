//! CountActiveMembersHandler - Query handler for the active census on one day.

use chrono::NaiveDate;
use std::sync::Arc;

use super::active_records_filter;
use crate::domain::membership::{MembershipGroup, MembershipRecord, ProductCatalog};
use crate::domain::statistics::{tally_active, ActiveCounts, StatisticsError};
use crate::ports::MembershipRecordSource;

/// Query for the members active on `date`.
///
/// `member_type` is the raw category filter; anything other than
/// `private`, `pension` or `union` means no filter.
#[derive(Debug, Clone)]
pub struct CountActiveMembersQuery {
    pub date: NaiveDate,
    pub member_type: Option<String>,
}

impl CountActiveMembersQuery {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            member_type: None,
        }
    }

    pub fn with_member_type(mut self, member_type: impl Into<String>) -> Self {
        self.member_type = Some(member_type.into());
        self
    }
}

/// Result type for the census query.
pub type CountActiveMembersResult = ActiveCounts;

/// Handler for counting active members on a date.
///
/// With a filter, only the filtered bucket is populated and `total` is the
/// filtered population.
pub struct CountActiveMembersHandler {
    source: Arc<dyn MembershipRecordSource>,
    catalog: Arc<ProductCatalog>,
}

impl CountActiveMembersHandler {
    pub fn new(source: Arc<dyn MembershipRecordSource>, catalog: Arc<ProductCatalog>) -> Self {
        Self { source, catalog }
    }

    pub async fn handle(
        &self,
        query: CountActiveMembersQuery,
    ) -> Result<CountActiveMembersResult, StatisticsError> {
        let filter = query
            .member_type
            .as_deref()
            .and_then(MembershipGroup::parse_filter);
        self.count_on(query.date, filter).await
    }

    /// Census for an already-parsed filter.
    pub async fn count_on(
        &self,
        date: NaiveDate,
        filter: Option<MembershipGroup>,
    ) -> Result<ActiveCounts, StatisticsError> {
        let records = self.candidates(filter).await?;
        Ok(self.tally_on(&records, date, filter, true))
    }

    /// Reads the records that can be active under `filter`.
    ///
    /// Returns an empty set when the store itself is empty.
    pub(super) async fn candidates(
        &self,
        filter: Option<MembershipGroup>,
    ) -> Result<Vec<MembershipRecord>, StatisticsError> {
        let records = self
            .source
            .fetch(&active_records_filter(filter, &self.catalog))
            .await?;

        if records.is_empty() && self.source.count_all().await? == 0 {
            tracing::info!(
                source = self.source.source_name(),
                "Membership record store is empty"
            );
        }

        Ok(records)
    }

    /// Tallies already-fetched candidates for one day.
    pub(super) fn tally_on(
        &self,
        records: &[MembershipRecord],
        date: NaiveDate,
        filter: Option<MembershipGroup>,
        report_malformed: bool,
    ) -> ActiveCounts {
        if records.is_empty() {
            return ActiveCounts::default();
        }

        let tally = tally_active(records, date, filter, &self.catalog);

        if report_malformed {
            for malformed in &tally.malformed {
                tracing::warn!(
                    record_id = %malformed.record_id,
                    field = malformed.field.as_str(),
                    value = %malformed.value,
                    "Excluding membership record with malformed date"
                );
            }
        }

        if tally.counts.total == 0 {
            tracing::debug!(
                %date,
                filter = filter.map(|g| g.as_str()),
                candidates = records.len(),
                "No active members on date"
            );
        }

        tally.counts
    }
}
