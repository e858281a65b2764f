//! Structured JSON logger
//!
//! - One log line = one JSON object = one event
//! - `event` first, `severity` second, remaining fields sorted by key
//! - Synchronous, no buffering
//! - Lines go to a [`LogSink`]: stdio by default, or an in-memory capture

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-operation detail
    Trace = 0,
    /// Normal lifecycle
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Broken invariants
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn uses_stderr(&self) -> bool {
        *self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where log lines go.
///
/// `Stdio` routes by severity. `Memory` keeps every line in a shared buffer
/// so tests can read back exactly what was emitted.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    /// stdout for TRACE/INFO/WARN, stderr for ERROR/FATAL
    #[default]
    Stdio,
    /// In-memory capture, shared between clones
    Memory(Arc<Mutex<Vec<u8>>>),
}

impl LogSink {
    /// Creates an empty in-memory sink.
    pub fn memory() -> Self {
        LogSink::Memory(Arc::new(Mutex::new(Vec::new())))
    }

    /// Returns the captured lines, without trailing newlines.
    ///
    /// Always empty for `Stdio`.
    pub fn lines(&self) -> Vec<String> {
        match self {
            LogSink::Stdio => Vec::new(),
            LogSink::Memory(buf) => {
                let buf = buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                String::from_utf8_lossy(&buf)
                    .lines()
                    .map(str::to_string)
                    .collect()
            }
        }
    }

    fn write_line(&self, severity: Severity, line: &str) {
        match self {
            LogSink::Stdio if severity.uses_stderr() => {
                Logger::log_to_writer(line, &mut io::stderr().lock())
            }
            LogSink::Stdio => Logger::log_to_writer(line, &mut io::stdout().lock()),
            LogSink::Memory(buf) => {
                let mut buf = buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                Logger::log_to_writer(line, &mut *buf);
            }
        }
    }
}

/// A structured logger that writes one JSON object per line
pub struct Logger;

impl Logger {
    /// Log an event to `sink`
    pub fn log(sink: &LogSink, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        sink.write_line(severity, &line);
    }

    /// Renders the log line (including the trailing newline) without writing it
    pub fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);

        let mut line = String::with_capacity(64 + fields.len() * 32);
        line.push_str("{\"event\":");
        line.push_str(&quote(event));
        line.push_str(",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');
        for (key, value) in sorted {
            line.push(',');
            line.push_str(&quote(key));
            line.push(':');
            line.push_str(&quote(value));
        }
        line.push_str("}\n");
        line
    }

    /// Writes one rendered line in a single call
    fn log_to_writer<W: Write>(line: &str, writer: &mut W) {
        // Logging never fails the caller
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// JSON-quotes a string. Serializing a `&str` cannot fail.
fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Trace < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_stream_routing() {
        assert!(!Severity::Trace.uses_stderr());
        assert!(!Severity::Warn.uses_stderr());
        assert!(Severity::Error.uses_stderr());
        assert!(Severity::Fatal.uses_stderr());
    }

    #[test]
    fn test_memory_sink_captures_lines() {
        let sink = LogSink::memory();
        Logger::log(&sink, Severity::Trace, "RECORD_INSERTED", &[("size", "5")]);
        Logger::log(&sink, Severity::Fatal, "INVARIANT_VIOLATION", &[]);

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(first["severity"], "TRACE");
        assert_eq!(second["severity"], "FATAL");
    }

    #[test]
    fn test_memory_sink_shared_between_clones() {
        let sink = LogSink::memory();
        let clone = sink.clone();
        Logger::log(&clone, Severity::Info, "STORE_CREATED", &[]);
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_stdio_sink_captures_nothing() {
        let sink = LogSink::default();
        Logger::log(&sink, Severity::Info, "STORE_TOUCHED", &[]);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_log_json_format() {
        let output = Logger::render(Severity::Trace, "RECORD_INSERTED", &[("size", "5")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "RECORD_INSERTED");
        assert_eq!(parsed["severity"], "TRACE");
        assert_eq!(parsed["size"], "5");
    }

    #[test]
    fn test_log_deterministic_ordering() {
        let output1 = Logger::render(
            Severity::Info,
            "TEST",
            &[("zebra", "1"), ("apple", "2"), ("mango", "3")],
        );
        let output2 = Logger::render(
            Severity::Info,
            "TEST",
            &[("apple", "2"), ("mango", "3"), ("zebra", "1")],
        );
        assert_eq!(output1, output2);

        let apple_pos = output1.find("apple").unwrap();
        let mango_pos = output1.find("mango").unwrap();
        let zebra_pos = output1.find("zebra").unwrap();
        assert!(apple_pos < mango_pos);
        assert!(mango_pos < zebra_pos);
    }

    #[test]
    fn test_log_escapes_special_chars() {
        let output = Logger::render(
            Severity::Fatal,
            "TEST",
            &[("message", "no record at \"0:4\"\n\ttab")],
        );

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["message"], "no record at \"0:4\"\n\ttab");
    }

    #[test]
    fn test_log_one_line_event_first() {
        let output = Logger::render(Severity::Info, "MY_EVENT", &[("a", "1"), ("b", "2")]);

        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
        assert!(output.ends_with('\n'));
        assert!(output.find("\"event\"").unwrap() < output.find("\"severity\"").unwrap());
    }
}
