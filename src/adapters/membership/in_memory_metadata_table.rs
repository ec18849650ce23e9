//! In-memory metadata table.
//!
//! Holds membership records the way the `pmm_membership_metadata` table
//! does. Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, RecordId};
use crate::domain::membership::MembershipRecord;
use crate::ports::{MembershipRecordSource, RecordFilter};

/// In-memory record store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMetadataTable {
    rows: Arc<RwLock<Vec<MembershipRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryMetadataTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table pre-filled with rows.
    pub fn with_records(records: Vec<MembershipRecord>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(records)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Append a row.
    pub async fn insert(&self, record: MembershipRecord) {
        self.rows.write().await.push(record);
    }

    /// Replace the status of every row with the given id.
    pub async fn set_status(&self, id: RecordId, status: &str) {
        let mut rows = self.rows.write().await;
        for row in rows.iter_mut().filter(|r| r.id == id) {
            row.status = status.to_string();
        }
    }

    /// Simulate the store going away (or coming back).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::database("metadata table unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl MembershipRecordSource for InMemoryMetadataTable {
    async fn fetch(&self, filter: &RecordFilter) -> Result<Vec<MembershipRecord>, DomainError> {
        self.check_available()?;
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        self.check_available()?;
        Ok(self.rows.read().await.len() as u64)
    }

    fn source_name(&self) -> &'static str {
        "in_memory_metadata_table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::membership::CategoryCode;

    fn record(id: u64, status: &str) -> MembershipRecord {
        MembershipRecord {
            id: RecordId::new(id),
            user_id: None,
            category_code: CategoryCode::new(9503),
            status: status.to_string(),
            start_date: "2024-01-01 00:00:00".to_string(),
            end_date: None,
            created_at: "2024-01-01 00:00:00".to_string(),
            postcode: None,
        }
    }

    #[tokio::test]
    async fn fetch_applies_filter() {
        let table = InMemoryMetadataTable::with_records(vec![
            record(1, "active"),
            record(2, "cancelled"),
        ]);

        let active = table.fetch(&RecordFilter::active()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(table.count_all().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn set_status_updates_rows() {
        let table = InMemoryMetadataTable::new();
        table.insert(record(1, "active")).await;
        table.set_status(RecordId::new(1), "cancelled").await;

        let active = table.fetch(&RecordFilter::active()).await.unwrap();
        assert!(active.is_empty());
    }

    #[tokio::test]
    async fn unavailable_table_returns_database_error() {
        let table = InMemoryMetadataTable::new();
        table.set_unavailable(true);

        let err = table.fetch(&RecordFilter::all()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(table.count_all().await.is_err());

        table.set_unavailable(false);
        assert_eq!(table.count_all().await.unwrap(), 0);
    }
}
