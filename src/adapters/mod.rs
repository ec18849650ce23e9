//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the statistics core to external systems:
//! - `membership` - Record sources (in-memory metadata table, commerce orders)
//! - `snapshots` - Daily snapshot storage (in-memory)
//! - `postgres` - PostgreSQL-backed record source and snapshot storage

pub mod membership;
pub mod postgres;
pub mod snapshots;

pub use membership::{InMemoryMetadataTable, InMemoryOrderBook, OrderDerivedRecordSource};
pub use postgres::{PostgresMembershipRecordSource, PostgresSnapshotRepository};
pub use snapshots::InMemorySnapshotRepository;
