//! Observability for the record store
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on storage behavior
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```
//! use heapstore::observability::{log_event, Event, LogSink};
//!
//! let sink = LogSink::memory();
//! log_event(&sink, Event::StoreCreated, &[("trace_operations", "true")]);
//! assert_eq!(sink.lines().len(), 1);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{LogSink, Logger, Severity};

/// Log a lifecycle event at INFO, or FATAL for fatal events
pub fn log_event(sink: &LogSink, event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(sink, severity, event.as_str(), fields);
}

/// Log a per-operation event at TRACE
pub fn trace_event(sink: &LogSink, event: Event, fields: &[(&str, &str)]) {
    Logger::log(sink, Severity::Trace, event.as_str(), fields);
}
