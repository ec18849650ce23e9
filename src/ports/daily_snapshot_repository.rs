//! Daily snapshot repository port.
//!
//! Stores one active-census snapshot per calendar day for growth reports.

use crate::domain::foundation::{DateRange, DomainError};
use crate::domain::statistics::DailySnapshot;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Outcome of saving a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSaveResult {
    /// Snapshot stored.
    Inserted,
    /// A snapshot for that date already exists; nothing was written.
    AlreadyRecorded,
}

/// Repository port for daily snapshots.
#[async_trait]
pub trait DailySnapshotRepository: Send + Sync {
    /// Store a snapshot unless one already exists for its date.
    async fn save(&self, snapshot: &DailySnapshot) -> Result<SnapshotSaveResult, DomainError>;

    /// Snapshot for one date, if recorded.
    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<DailySnapshot>, DomainError>;

    /// Snapshots inside the range, ordered by date.
    async fn list_between(&self, range: &DateRange) -> Result<Vec<DailySnapshot>, DomainError>;
}
