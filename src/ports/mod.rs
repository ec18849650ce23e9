//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MembershipRecordSource` - Read access to membership records
//! - `CommerceOrderReader` - Read access to commerce orders
//! - `DailySnapshotRepository` - Persistence of daily census snapshots

mod commerce_order_reader;
mod daily_snapshot_repository;
mod membership_record_source;

pub use commerce_order_reader::{CommerceOrder, CommerceOrderReader, OrderItem};
pub use daily_snapshot_repository::{DailySnapshotRepository, SnapshotSaveResult};
pub use membership_record_source::{MembershipRecordSource, RecordFilter};
