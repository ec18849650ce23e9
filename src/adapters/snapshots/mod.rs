//! Snapshot adapters - implementations of `DailySnapshotRepository`.

mod in_memory;

pub use in_memory::InMemorySnapshotRepository;
