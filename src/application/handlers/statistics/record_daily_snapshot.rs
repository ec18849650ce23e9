//! RecordDailySnapshotHandler - Command handler that stores the daily census.

use chrono::NaiveDate;
use std::sync::Arc;

use super::CountActiveMembersHandler;
use crate::domain::membership::ProductCatalog;
use crate::domain::statistics::{DailySnapshot, StatisticsError};
use crate::ports::{DailySnapshotRepository, MembershipRecordSource, SnapshotSaveResult};

/// Command to record the unfiltered census of `date`.
#[derive(Debug, Clone)]
pub struct RecordDailySnapshotCommand {
    pub date: NaiveDate,
}

/// Result of recording a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDailySnapshotResult {
    /// Snapshot computed by this run.
    pub snapshot: DailySnapshot,
    pub outcome: SnapshotSaveResult,
}

/// Handler for the once-per-day census snapshot.
///
/// A date that already has a snapshot keeps its first recording.
pub struct RecordDailySnapshotHandler {
    census: CountActiveMembersHandler,
    snapshots: Arc<dyn DailySnapshotRepository>,
}

impl RecordDailySnapshotHandler {
    pub fn new(
        source: Arc<dyn MembershipRecordSource>,
        catalog: Arc<ProductCatalog>,
        snapshots: Arc<dyn DailySnapshotRepository>,
    ) -> Self {
        Self {
            census: CountActiveMembersHandler::new(source, catalog),
            snapshots,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordDailySnapshotCommand,
    ) -> Result<RecordDailySnapshotResult, StatisticsError> {
        let counts = self.census.count_on(cmd.date, None).await?;
        let snapshot = DailySnapshot::from_counts(cmd.date, counts);

        let outcome = self.snapshots.save(&snapshot).await?;
        match outcome {
            SnapshotSaveResult::Inserted => tracing::info!(
                date = %cmd.date,
                total = snapshot.total,
                private = snapshot.private,
                pension = snapshot.pension,
                union = snapshot.union,
                "Recorded daily membership snapshot"
            ),
            SnapshotSaveResult::AlreadyRecorded => {
                tracing::info!(date = %cmd.date, "Daily membership snapshot already recorded")
            }
        }

        Ok(RecordDailySnapshotResult { snapshot, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::membership::InMemoryMetadataTable;
    use crate::adapters::snapshots::InMemorySnapshotRepository;
    use crate::domain::foundation::{DateRange, DomainError, ErrorCode, RecordId};
    use crate::domain::membership::{CategoryCode, MembershipRecord};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementation
    // ════════════════════════════════════════════════════════════════════════════

    struct FailingSnapshotRepository;

    #[async_trait]
    impl DailySnapshotRepository for FailingSnapshotRepository {
        async fn save(&self, _snapshot: &DailySnapshot) -> Result<SnapshotSaveResult, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "Simulated write failure"))
        }

        async fn find_by_date(&self, _date: NaiveDate) -> Result<Option<DailySnapshot>, DomainError> {
            Ok(None)
        }

        async fn list_between(&self, _range: &DateRange) -> Result<Vec<DailySnapshot>, DomainError> {
            Ok(vec![])
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn record(id: u64, code: u32) -> MembershipRecord {
        MembershipRecord {
            id: RecordId::new(id),
            user_id: None,
            category_code: CategoryCode::new(code),
            status: "active".to_string(),
            start_date: "2024-01-01 00:00:00".to_string(),
            end_date: None,
            created_at: "2024-01-01 00:00:00".to_string(),
            postcode: None,
        }
    }

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn table() -> Arc<InMemoryMetadataTable> {
        Arc::new(InMemoryMetadataTable::with_records(vec![
            record(1, 9503),
            record(2, 28736),
            record(3, 19221),
        ]))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn stores_census_of_the_day() {
        let snapshots = Arc::new(InMemorySnapshotRepository::new());
        let handler = RecordDailySnapshotHandler::new(
            table(),
            Arc::new(ProductCatalog::default()),
            snapshots.clone(),
        );

        let result = handler
            .handle(RecordDailySnapshotCommand {
                date: date("2024-05-01"),
            })
            .await
            .unwrap();

        assert_eq!(result.outcome, SnapshotSaveResult::Inserted);
        assert_eq!(result.snapshot.total, 3);

        let stored = snapshots.find_by_date(date("2024-05-01")).await.unwrap();
        assert_eq!(stored, Some(result.snapshot));
    }

    #[tokio::test]
    async fn second_run_keeps_first_snapshot() {
        let table = table();
        let snapshots = Arc::new(InMemorySnapshotRepository::new());
        let handler = RecordDailySnapshotHandler::new(
            table.clone(),
            Arc::new(ProductCatalog::default()),
            snapshots.clone(),
        );
        let cmd = RecordDailySnapshotCommand {
            date: date("2024-05-01"),
        };

        handler.handle(cmd.clone()).await.unwrap();
        table.set_status(RecordId::new(1), "cancelled").await;
        let second = handler.handle(cmd).await.unwrap();

        assert_eq!(second.outcome, SnapshotSaveResult::AlreadyRecorded);
        let stored = snapshots.find_by_date(date("2024-05-01")).await.unwrap();
        assert_eq!(stored.map(|s| s.total), Some(3));
        assert_eq!(snapshots.len().await, 1);
    }

    #[tokio::test]
    async fn snapshot_storage_failure_is_reported() {
        let handler = RecordDailySnapshotHandler::new(
            table(),
            Arc::new(ProductCatalog::default()),
            Arc::new(FailingSnapshotRepository),
        );

        let result = handler
            .handle(RecordDailySnapshotCommand {
                date: date("2024-05-01"),
            })
            .await;

        assert!(matches!(result, Err(StatisticsError::StorageUnavailable(_))));
    }
}
