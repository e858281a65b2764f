//! heapstore - An in-memory record store for exercising index logic
//!
//! Stands in for a disk-backed engine's record layer: insert bytes, get a
//! stable [`Location`](storage::Location), fetch or delete by it.

pub mod observability;
pub mod storage;

pub use storage::{HeapRecordStore, Location, RecordStore};
