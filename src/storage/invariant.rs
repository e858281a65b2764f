//! Fatal invariant handling
//!
//! Missing-key fetch/delete and allocator exhaustion are caller bugs, not
//! runtime conditions. They are logged at FATAL and then unwind; the store
//! never catches them.

use super::errors::StorageError;
use crate::observability::{log_event, Event, LogSink};

/// Logs a fatal storage error to `sink` and panics with its display text.
#[cold]
#[track_caller]
pub(crate) fn invariant_violated(sink: &LogSink, err: StorageError) -> ! {
    debug_assert!(err.is_fatal());
    log_event(
        sink,
        Event::InvariantViolation,
        &[
            ("code", err.code().code()),
            ("message", err.message()),
            ("details", err.details().unwrap_or("")),
        ],
    );
    panic!("{}", err);
}
