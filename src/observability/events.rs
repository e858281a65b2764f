//! Observable record store events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A store instance was created
    StoreCreated,
    /// A record was inserted (from bytes or a document writer)
    RecordInserted,
    /// A record was deleted
    RecordDeleted,
    /// Touch was requested
    StoreTouched,
    /// A storage invariant was broken (FATAL)
    InvariantViolation,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StoreCreated => "STORE_CREATED",
            Event::RecordInserted => "RECORD_INSERTED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::StoreTouched => "STORE_TOUCHED",
            Event::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::InvariantViolation)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
