//! Membership adapters - implementations of the record source ports.
//!
//! - `InMemoryMetadataTable` - Metadata table rows held in memory
//! - `OrderDerivedRecordSource` - Records reconstructed from commerce orders
//! - `InMemoryOrderBook` - In-memory commerce orders for the derived source

mod in_memory_metadata_table;
mod in_memory_order_book;
mod order_derived;

pub use in_memory_metadata_table::InMemoryMetadataTable;
pub use in_memory_order_book::InMemoryOrderBook;
pub use order_derived::{OrderDerivedRecordSource, COMPLETED_ORDER_STATUS};
