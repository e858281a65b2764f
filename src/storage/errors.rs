//! Storage error types
//!
//! Error codes:
//! - AERO_RECORD_NOT_FOUND (FATAL)
//! - AERO_LOCATION_EXHAUSTED (FATAL)
//! - AERO_LOCATION_INVALID (ERROR severity)
//! - AERO_STORAGE_QUOTA_EXCEEDED (ERROR severity) - never produced by the heap store

use std::fmt;

use super::location::{Location, LocationError};

/// Severity levels for storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, caller may continue
    Error,
    /// Broken invariant, the operation must not continue
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Storage-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorCode {
    /// Fetch or delete of a location that holds no record
    AeroRecordNotFound,
    /// Allocator counter ran past the addressable range
    AeroLocationExhausted,
    /// A location violates the reserved-bit layout
    AeroLocationInvalid,
    /// Insert refused for lack of space
    AeroStorageQuotaExceeded,
}

impl StorageErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StorageErrorCode::AeroRecordNotFound => "AERO_RECORD_NOT_FOUND",
            StorageErrorCode::AeroLocationExhausted => "AERO_LOCATION_EXHAUSTED",
            StorageErrorCode::AeroLocationInvalid => "AERO_LOCATION_INVALID",
            StorageErrorCode::AeroStorageQuotaExceeded => "AERO_STORAGE_QUOTA_EXCEEDED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StorageErrorCode::AeroRecordNotFound => Severity::Fatal,
            StorageErrorCode::AeroLocationExhausted => Severity::Fatal,
            StorageErrorCode::AeroLocationInvalid => Severity::Error,
            StorageErrorCode::AeroStorageQuotaExceeded => Severity::Error,
        }
    }

    /// Returns the invariant violated by this error, if applicable
    pub fn invariant(&self) -> Option<&'static str> {
        match self {
            StorageErrorCode::AeroRecordNotFound => Some("location must be live"),
            StorageErrorCode::AeroLocationExhausted => Some("location id < 2^53"),
            StorageErrorCode::AeroLocationInvalid => Some("reserved low bits clear"),
            StorageErrorCode::AeroStorageQuotaExceeded => None,
        }
    }
}

impl fmt::Display for StorageErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error type with full context
#[derive(Debug)]
pub struct StorageError {
    /// Error code
    code: StorageErrorCode,
    /// Human-readable message
    message: String,
    /// Optional details about the error context
    details: Option<String>,
    /// Underlying location error if applicable
    source: Option<LocationError>,
}

impl StorageError {
    /// Create a record-not-found error (FATAL)
    pub fn record_not_found(location: Location) -> Self {
        Self {
            code: StorageErrorCode::AeroRecordNotFound,
            message: "no record at location".to_string(),
            details: Some(format!("location: {}", location)),
            source: None,
        }
    }

    /// Create an allocator exhaustion error (FATAL)
    pub fn location_exhausted(next_id: u64) -> Self {
        Self {
            code: StorageErrorCode::AeroLocationExhausted,
            message: "location allocator exhausted".to_string(),
            details: Some(format!("next_id: {}", next_id)),
            source: None,
        }
    }

    /// Create an invalid location error
    pub fn location_invalid(source: LocationError) -> Self {
        Self {
            code: StorageErrorCode::AeroLocationInvalid,
            message: source.to_string(),
            details: None,
            source: Some(source),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StorageErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the invariant violated, if applicable
    pub fn invariant(&self) -> Option<&'static str> {
        self.code.invariant()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns whether this error is fatal
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        if let Some(invariant) = self.code.invariant() {
            write!(f, " [violates {}]", invariant)?;
        }
        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<LocationError> for StorageError {
    fn from(err: LocationError) -> Self {
        StorageError::location_invalid(err)
    }
}

/// Result type for storage operations
///
/// Heap store inserts and touches always return `Ok`; the `Err` arm is kept
/// so callers written against a fallible engine run unchanged.
pub type StorageResult<T> = Result<T, StorageError>;
