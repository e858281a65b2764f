//! Record storage subsystem
//!
//! An in-memory record layer that index logic can be tested against in place
//! of a disk-backed engine. Callers allocate nothing themselves: they insert
//! bytes, get back a [`Location`], and later fetch or delete by it.
//!
//! # Design Principles
//!
//! - Records are copied in on insert and owned by the store until deleted
//! - No in-place updates, no record growth
//! - Locations come from a monotonic allocator and are never reused
//! - Each store is an independent instance; there is no global store
//!
//! # Invariants Enforced
//!
//! - Location layout: bit 31 and bit 0 of the low field are always 0
//! - Allocator ids stay below 2^53
//! - Fetch/delete target a live location (violations are FATAL)

mod allocator;
mod config;
mod contract;
mod doc_writer;
mod errors;
mod heap;
mod invariant;
mod location;
mod record;

pub use allocator::{LocationAllocator, MAX_LOCATION_ID};
pub use config::HeapStoreConfig;
pub use contract::{RecordStore, TouchOutput};
pub use doc_writer::{DocWriter, JsonDocument};
pub use errors::{Severity, StorageError, StorageErrorCode, StorageResult};
pub use heap::HeapRecordStore;
pub use location::{Location, LocationError, ENCODED_LOCATION_LEN};
pub use record::{Record, RecordData};
