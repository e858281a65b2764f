//! Heap store configuration
//!
//! Nothing here changes storage semantics. The quota flag on inserts stays
//! ignored whatever the configuration says.

use serde::{Deserialize, Serialize};

/// Configuration for a [`HeapRecordStore`](super::HeapRecordStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapStoreConfig {
    /// Emit a TRACE log line per create/insert/delete/touch (default: false)
    #[serde(default)]
    pub trace_operations: bool,
}

impl Default for HeapStoreConfig {
    fn default() -> Self {
        Self {
            trace_operations: false,
        }
    }
}

impl HeapStoreConfig {
    /// Create config with operation tracing enabled.
    pub fn traced() -> Self {
        Self {
            trace_operations: true,
        }
    }

    /// Create config with operation tracing disabled.
    pub fn quiet() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
