//! CountRecordsHandler - Query handler for the raw size of the record store.

use std::sync::Arc;

use crate::domain::statistics::StatisticsError;
use crate::ports::MembershipRecordSource;

/// Query for the number of stored membership records.
///
/// Counts every record regardless of status or date validity.
#[derive(Debug, Clone, Default)]
pub struct CountRecordsQuery;

pub type CountRecordsResult = u64;

pub struct CountRecordsHandler {
    source: Arc<dyn MembershipRecordSource>,
}

impl CountRecordsHandler {
    pub fn new(source: Arc<dyn MembershipRecordSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, _query: CountRecordsQuery) -> Result<CountRecordsResult, StatisticsError> {
        let count = self.source.count_all().await?;
        tracing::debug!(source = self.source.source_name(), count, "Counted membership records");
        Ok(count)
    }
}
