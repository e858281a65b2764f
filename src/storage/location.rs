//! Location - fixed-width logical record address
//!
//! A location is two signed 32-bit fields, `high` and `low`. Index pages embed
//! locations verbatim, so the layout constraints of that format apply here:
//!
//! - bit 31 of `low` is reserved and must be 0 (`low` is never negative)
//! - bit 0 of `low` is reserved as a flag bit and must be 0
//!
//! Encoded form (8 bytes):
//!
//! ```text
//! +------------------+
//! | High             | (i32 LE)
//! +------------------+
//! | Low              | (i32 LE)
//! +------------------+
//! ```

use std::fmt;

use thiserror::Error;

/// Width of an encoded location in bytes
pub const ENCODED_LOCATION_LEN: usize = 8;

/// Reasons a pair of raw fields cannot form a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("low field {0:#x} has the sign bit set")]
    SignBitSet(i32),

    #[error("low field {0:#x} has the flag bit set")]
    FlagBitSet(i32),

    #[error("encoded location must be 8 bytes, got {0}")]
    BadLength(usize),
}

/// Opaque, totally ordered record address.
///
/// Ordering compares `high` first, then `low`. Callers treat locations as
/// handles only: compare them, hash them, store them, hand them back.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    high: i32,
    low: i32,
}

impl Location {
    /// The conventional "no record" marker. Never handed out by an allocator.
    pub const NULL: Location = Location { high: -1, low: 0 };

    /// Builds a location from raw fields, enforcing the reserved bits.
    pub fn new(high: i32, low: i32) -> Result<Self, LocationError> {
        if low < 0 {
            return Err(LocationError::SignBitSet(low));
        }
        if low & 1 != 0 {
            return Err(LocationError::FlagBitSet(low));
        }
        Ok(Self { high, low })
    }

    /// Returns the high field.
    #[inline]
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Returns the low field.
    #[inline]
    pub fn low(&self) -> i32 {
        self.low
    }

    /// Returns true for the [`Location::NULL`] marker.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.high == -1
    }

    /// Encodes to the fixed-width form used inside index pages.
    pub fn to_bytes(&self) -> [u8; ENCODED_LOCATION_LEN] {
        let mut buf = [0u8; ENCODED_LOCATION_LEN];
        buf[0..4].copy_from_slice(&self.high.to_le_bytes());
        buf[4..8].copy_from_slice(&self.low.to_le_bytes());
        buf
    }

    /// Decodes the fixed-width form, re-checking the reserved bits.
    pub fn from_bytes(data: &[u8]) -> Result<Self, LocationError> {
        if data.len() != ENCODED_LOCATION_LEN {
            return Err(LocationError::BadLength(data.len()));
        }
        let high = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        let low = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        Self::new(high, low)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:x}", self.high, self.low)
    }
}
