//! Storage implementations for the planner's repositories

pub mod in_memory;
pub mod snapshot;

pub use in_memory::InMemoryDataService;
pub use snapshot::{BakerySnapshot, SnapshotStores};
