//! PostgreSQL adapters - Database implementations for the statistics ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresMembershipRecordSource` - Reads the membership metadata table
//! - `PostgresSnapshotRepository` - Stores daily census snapshots
//!
//! Both tables are created by [`create_tables`].

mod membership_record_source;
mod snapshot_repository;

pub use membership_record_source::PostgresMembershipRecordSource;
pub use snapshot_repository::PostgresSnapshotRepository;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Open a connection pool using the database configuration.
///
/// Creates the plugin tables when `create_tables` is set.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    tracing::info!(url = %config.redacted_url(), "Connecting to membership database");

    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to database: {}", e)))?;

    if config.create_tables {
        create_tables(&pool).await?;
    }
    Ok(pool)
}

/// Create the metadata and snapshot tables if they do not exist.
///
/// Date columns of the metadata table are `TEXT` on purpose: rows written
/// by older plugin versions may hold values that are not valid datetimes.
pub async fn create_tables(pool: &PgPool) -> Result<(), DomainError> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS pmm_membership_metadata (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT,
            order_id BIGINT NOT NULL,
            membership_type TEXT NOT NULL,
            membership_number TEXT NOT NULL DEFAULT '',
            start_date TEXT NOT NULL,
            end_date TEXT,
            payment_method TEXT NOT NULL DEFAULT '',
            payment_id TEXT,
            membership_status TEXT NOT NULL,
            renewal_type TEXT NOT NULL DEFAULT '',
            billing_postcode TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        "CREATE INDEX IF NOT EXISTS pmm_membership_metadata_user_id ON pmm_membership_metadata (user_id)",
        "CREATE INDEX IF NOT EXISTS pmm_membership_metadata_order_id ON pmm_membership_metadata (order_id)",
        r#"
        CREATE TABLE IF NOT EXISTS pmm_daily_statistics (
            date DATE PRIMARY KEY,
            total_memberships BIGINT NOT NULL,
            private_memberships BIGINT NOT NULL,
            pension_memberships BIGINT NOT NULL,
            union_memberships BIGINT NOT NULL
        )
        "#,
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create tables: {}", e)))?;
    }
    Ok(())
}
