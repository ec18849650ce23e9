//! PostgreSQL implementation of MembershipRecordSource.
//!
//! Reads the `pmm_membership_metadata` table. Status and product filters
//! are pushed into SQL; date columns are returned as raw text so the
//! domain can exclude malformed rows one by one.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, RecordId, UserId};
use crate::domain::membership::{CategoryCode, MembershipRecord};
use crate::ports::{MembershipRecordSource, RecordFilter};

/// PostgreSQL implementation of the MembershipRecordSource port.
pub struct PostgresMembershipRecordSource {
    pool: PgPool,
}

impl PostgresMembershipRecordSource {
    /// Creates a new PostgresMembershipRecordSource with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row of the metadata table.
#[derive(Debug, sqlx::FromRow)]
struct MetadataRow {
    id: i64,
    user_id: Option<i64>,
    membership_type: String,
    membership_status: String,
    start_date: String,
    end_date: Option<String>,
    created_at: String,
    billing_postcode: Option<String>,
}

/// Reads a stored `membership_type` as a product code.
///
/// Mirrors the SQL filter in `fetch`: surrounding spaces are trimmed and
/// the rest must be decimal digits. Leading zeros are allowed.
fn normalize_membership_type(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_matches(' ');
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

fn parse_membership_type(id: i64, raw: &str) -> CategoryCode {
    match normalize_membership_type(raw) {
        Some(code) => CategoryCode::new(code),
        None => {
            // Counted as an unknown product: total only, no group.
            tracing::warn!(record_id = id, membership_type = %raw, "Non-numeric membership_type");
            CategoryCode::new(0)
        }
    }
}

/// Product codes bound to the `membership_type` filter.
fn code_filter_values(filter: &RecordFilter) -> Option<Vec<i64>> {
    filter
        .codes
        .as_ref()
        .map(|codes| codes.iter().map(|c| i64::from(c.as_u32())).collect())
}

impl From<MetadataRow> for MembershipRecord {
    fn from(row: MetadataRow) -> Self {
        MembershipRecord {
            id: RecordId::new(row.id.max(0) as u64),
            user_id: row.user_id.and_then(|u| UserId::from_raw(u.max(0) as u64)),
            category_code: parse_membership_type(row.id, &row.membership_type),
            status: row.membership_status,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
            postcode: row.billing_postcode,
        }
    }
}

#[async_trait]
impl MembershipRecordSource for PostgresMembershipRecordSource {
    async fn fetch(&self, filter: &RecordFilter) -> Result<Vec<MembershipRecord>, DomainError> {
        let rows: Vec<MetadataRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, membership_type, membership_status,
                   start_date, end_date, created_at, billing_postcode
            FROM pmm_membership_metadata
            WHERE ($1::TEXT IS NULL OR membership_status = $1)
              AND ($2::BIGINT[] IS NULL OR
                   CASE WHEN TRIM(membership_type) ~ '^[0-9]+$'
                        THEN TRIM(membership_type)::NUMERIC
                   END = ANY($2::NUMERIC[]))
            ORDER BY id
            "#,
        )
        .bind(filter.status.as_deref())
        .bind(code_filter_values(filter))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch membership records: {}", e)))?;

        Ok(rows.into_iter().map(MembershipRecord::from).collect())
    }

    async fn count_all(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pmm_membership_metadata")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to count membership records: {}", e))
            })?;

        Ok(count.max(0) as u64)
    }

    fn source_name(&self) -> &'static str {
        "postgres_metadata_table"
    }
}
