//! PostgreSQL implementation of DailySnapshotRepository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::foundation::{DateRange, DomainError};
use crate::domain::statistics::DailySnapshot;
use crate::ports::{DailySnapshotRepository, SnapshotSaveResult};

/// PostgreSQL implementation of the DailySnapshotRepository port.
pub struct PostgresSnapshotRepository {
    pool: PgPool,
}

impl PostgresSnapshotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SnapshotRow {
    date: NaiveDate,
    total_memberships: i64,
    private_memberships: i64,
    pension_memberships: i64,
    union_memberships: i64,
}

impl From<SnapshotRow> for DailySnapshot {
    fn from(row: SnapshotRow) -> Self {
        DailySnapshot {
            date: row.date,
            total: row.total_memberships.max(0) as u64,
            private: row.private_memberships.max(0) as u64,
            pension: row.pension_memberships.max(0) as u64,
            union: row.union_memberships.max(0) as u64,
        }
    }
}

#[async_trait]
impl DailySnapshotRepository for PostgresSnapshotRepository {
    async fn save(&self, snapshot: &DailySnapshot) -> Result<SnapshotSaveResult, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO pmm_daily_statistics
                (date, total_memberships, private_memberships, pension_memberships, union_memberships)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (date) DO NOTHING
            "#,
        )
        .bind(snapshot.date)
        .bind(snapshot.total as i64)
        .bind(snapshot.private as i64)
        .bind(snapshot.pension as i64)
        .bind(snapshot.union as i64)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save daily snapshot: {}", e)))?;

        if result.rows_affected() == 0 {
            Ok(SnapshotSaveResult::AlreadyRecorded)
        } else {
            Ok(SnapshotSaveResult::Inserted)
        }
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Option<DailySnapshot>, DomainError> {
        let row: Option<SnapshotRow> = sqlx::query_as(
            r#"
            SELECT date, total_memberships, private_memberships, pension_memberships, union_memberships
            FROM pmm_daily_statistics
            WHERE date = $1
            "#,
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to get daily snapshot: {}", e)))?;

        Ok(row.map(DailySnapshot::from))
    }

    async fn list_between(&self, range: &DateRange) -> Result<Vec<DailySnapshot>, DomainError> {
        let rows: Vec<SnapshotRow> = sqlx::query_as(
            r#"
            SELECT date, total_memberships, private_memberships, pension_memberships, union_memberships
            FROM pmm_daily_statistics
            WHERE date BETWEEN $1 AND $2
            ORDER BY date ASC
            "#,
        )
        .bind(range.from())
        .bind(range.to())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list daily snapshots: {}", e)))?;

        Ok(rows.into_iter().map(DailySnapshot::from).collect())
    }
}
