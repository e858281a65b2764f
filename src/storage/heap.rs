//! Heap-backed record store
//!
//! Every record lives in an ordered in-memory map until it is explicitly
//! deleted. There is no persistence, caching, eviction, compaction or
//! in-place update, and no internal locking: a store is owned by one test
//! and callers serialize access themselves.

use std::collections::BTreeMap;

use super::allocator::LocationAllocator;
use super::config::HeapStoreConfig;
use super::contract::{RecordStore, TouchOutput};
use super::doc_writer::DocWriter;
use super::errors::{StorageError, StorageResult};
use super::invariant::invariant_violated;
use super::location::Location;
use super::record::{Record, RecordData};
use crate::observability::{trace_event, Event, LogSink};

/// In-memory stand-in for an engine's record layer.
#[derive(Debug)]
pub struct HeapRecordStore {
    /// Location -> record, ordered by location
    records: BTreeMap<Location, Record>,
    /// Monotonic location source, never recycles
    allocator: LocationAllocator,
    /// Sum of live record sizes
    data_size: usize,
    config: HeapStoreConfig,
    /// Destination for TRACE and FATAL lines
    sink: LogSink,
}

impl HeapRecordStore {
    /// Creates an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(HeapStoreConfig::default())
    }

    /// Creates an empty store with an explicit configuration.
    pub fn with_config(config: HeapStoreConfig) -> Self {
        Self::with_allocator(config, LocationAllocator::new())
    }

    /// Creates an empty store drawing locations from `allocator`.
    pub fn with_allocator(config: HeapStoreConfig, allocator: LocationAllocator) -> Self {
        Self::build(config, allocator, LogSink::default())
    }

    /// Creates an empty store that writes its log lines to `sink`.
    pub fn with_log_sink(config: HeapStoreConfig, sink: LogSink) -> Self {
        Self::build(config, LocationAllocator::new(), sink)
    }

    fn build(config: HeapStoreConfig, allocator: LocationAllocator, sink: LogSink) -> Self {
        let store = Self {
            records: BTreeMap::new(),
            allocator,
            data_size: 0,
            config,
            sink,
        };
        if store.config.trace_operations {
            let next_id = store.allocator.next_id().to_string();
            trace_event(
                &store.sink,
                Event::StoreCreated,
                &[("next_id", next_id.as_str())],
            );
        }
        store
    }

    /// Returns the store configuration.
    pub fn config(&self) -> &HeapStoreConfig {
        &self.config
    }

    /// Returns the sink log lines are written to.
    pub fn log_sink(&self) -> &LogSink {
        &self.sink
    }

    /// Number of live records.
    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    /// Total bytes held by live records.
    pub fn data_size(&self) -> usize {
        self.data_size
    }

    /// Returns true if no records are live.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if `location` currently holds a record.
    pub fn contains(&self, location: Location) -> bool {
        self.records.contains_key(&location)
    }

    /// Registers a populated record under a fresh location.
    fn store(&mut self, record: Record) -> Location {
        let location = match self.allocator.try_allocate() {
            Ok(location) => location,
            Err(err) => invariant_violated(&self.sink, err),
        };
        let size = record.size();
        self.data_size += size;
        let previous = self.records.insert(location, record);
        debug_assert!(previous.is_none(), "allocator reissued {}", location);

        if self.config.trace_operations {
            let loc = location.to_string();
            let size = size.to_string();
            trace_event(
                &self.sink,
                Event::RecordInserted,
                &[("location", loc.as_str()), ("size", size.as_str())],
            );
        }
        location
    }
}

impl Default for HeapRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for HeapRecordStore {
    fn fetch(&self, location: Location) -> RecordData<'_> {
        match self.records.get(&location) {
            Some(record) => record.view(),
            None => invariant_violated(&self.sink, StorageError::record_not_found(location)),
        }
    }

    fn insert_record(&mut self, data: &[u8], _enforce_quota: bool) -> StorageResult<Location> {
        Ok(self.store(Record::copy_from(data)))
    }

    fn insert_document(
        &mut self,
        doc: &dyn DocWriter,
        _enforce_quota: bool,
    ) -> StorageResult<Location> {
        let mut record = Record::zeroed(doc.document_size());
        doc.write_document(record.as_mut_slice());
        Ok(self.store(record))
    }

    fn delete_record(&mut self, location: Location) {
        let record = match self.records.remove(&location) {
            Some(record) => record,
            None => invariant_violated(&self.sink, StorageError::record_not_found(location)),
        };
        self.data_size -= record.size();

        if self.config.trace_operations {
            let loc = location.to_string();
            trace_event(&self.sink, Event::RecordDeleted, &[("location", loc.as_str())]);
        }
    }

    fn touch(&self, _output: &mut TouchOutput) -> StorageResult<()> {
        // Everything is already resident.
        if self.config.trace_operations {
            trace_event(&self.sink, Event::StoreTouched, &[]);
        }
        Ok(())
    }
}
