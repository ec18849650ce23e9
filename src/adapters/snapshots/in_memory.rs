//! In-memory daily snapshot repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DateRange, DomainError};
use crate::domain::statistics::DailySnapshot;
use crate::ports::{DailySnapshotRepository, SnapshotSaveResult};

/// Snapshots keyed by date.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotRepository {
    snapshots: Arc<RwLock<BTreeMap<NaiveDate, DailySnapshot>>>,
}

impl InMemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }
}

#[async_trait]
impl DailySnapshotRepository for InMemorySnapshotRepository {
    async fn save(&self, snapshot: &DailySnapshot) -> Result<SnapshotSaveResult, DomainError> {
        let mut snapshots = self.snapshots.write().await;
        if snapshots.contains_key(&snapshot.date) {
            return Ok(SnapshotSaveResult::AlreadyRecorded);
        }
        snapshots.insert(snapshot.date, *snapshot);
        Ok(SnapshotSaveResult::Inserted)
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<DailySnapshot>, DomainError> {
        Ok(self.snapshots.read().await.get(&date).copied())
    }

    async fn list_between(&self, range: &DateRange) -> Result<Vec<DailySnapshot>, DomainError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots
            .range(range.from()..=range.to())
            .map(|(_, s)| *s)
            .collect())
    }
}
