//! Monotonic location allocator
//!
//! Packs a 64-bit counter into the two constrained location fields:
//!
//! ```text
//! high = id >> 30
//! low  = (id << 1) & 0x7fff_fffe
//! ```
//!
//! `low` keeps 30 counter bits above the flag bit, and `high` takes the rest.
//! The flag bit and the sign bit of `low` stay clear, which leaves 53 usable
//! counter bits in total. Locations are never recycled.

use super::errors::{StorageError, StorageResult};
use super::invariant::invariant_violated;
use super::location::Location;
use crate::observability::LogSink;

/// Exclusive upper bound on allocator ids
pub const MAX_LOCATION_ID: u64 = 1 << 53;

const LOW_FIELD_MASK: u64 = 0x7fff_ffff;

/// Hands out fresh locations in strictly increasing order.
#[derive(Debug, Default)]
pub struct LocationAllocator {
    next_id: u64,
}

impl LocationAllocator {
    /// Creates an allocator whose first id is 0.
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Creates an allocator whose next id is `next_id`.
    ///
    /// Lets tests reach the top of the id range without 2^53 calls.
    pub fn starting_at(next_id: u64) -> Self {
        Self { next_id }
    }

    /// Returns the id the next call to [`allocate`](Self::allocate) will use.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Packs an id into a location.
    ///
    /// Fails with `AERO_LOCATION_EXHAUSTED` when `id >= 2^53`.
    pub fn pack(id: u64) -> StorageResult<Location> {
        if id >= MAX_LOCATION_ID {
            return Err(StorageError::location_exhausted(id));
        }
        let high = (id >> 30) as i32;
        let low = ((id << 1) & LOW_FIELD_MASK) as i32;
        Ok(Location::new(high, low)?)
    }

    /// Returns a fresh location and advances the counter.
    ///
    /// The counter only moves on success, so an exhausted allocator stays
    /// exhausted instead of wrapping.
    pub fn try_allocate(&mut self) -> StorageResult<Location> {
        let loc = Self::pack(self.next_id)?;
        self.next_id += 1;
        Ok(loc)
    }

    /// Returns a fresh location and advances the counter.
    ///
    /// # Panics
    ///
    /// Exhausting the id range is a fatal invariant violation.
    pub fn allocate(&mut self) -> Location {
        match self.try_allocate() {
            Ok(loc) => loc,
            Err(err) => invariant_violated(&LogSink::Stdio, err),
        }
    }
}
