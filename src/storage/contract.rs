//! Record store contract
//!
//! The surface index logic is written against. Any engine implementing it
//! (the heap store here, a disk-backed engine elsewhere) can sit under the
//! same tree code.

use super::doc_writer::DocWriter;
use super::errors::StorageResult;
use super::location::Location;
use super::record::RecordData;

/// Output builder handed to [`RecordStore::touch`].
pub type TouchOutput = serde_json::Map<String, serde_json::Value>;

/// Record-level storage operations.
///
/// # Invariants
///
/// - Every location returned by an insert is unique for the store's lifetime
/// - `fetch` and `delete_record` require a live location; anything else is a
///   fatal caller bug and panics
pub trait RecordStore {
    /// Borrows the bytes stored at `location`.
    ///
    /// # Panics
    ///
    /// If `location` holds no record.
    fn fetch(&self, location: Location) -> RecordData<'_>;

    /// Stores a copy of `data` under a fresh location.
    fn insert_record(&mut self, data: &[u8], enforce_quota: bool) -> StorageResult<Location>;

    /// Stores the output of `doc` under a fresh location.
    fn insert_document(
        &mut self,
        doc: &dyn DocWriter,
        enforce_quota: bool,
    ) -> StorageResult<Location>;

    /// Removes the record at `location`.
    ///
    /// # Panics
    ///
    /// If `location` holds no record.
    fn delete_record(&mut self, location: Location);

    /// Asks the store to warm its cache, reporting into `output`.
    fn touch(&self, output: &mut TouchOutput) -> StorageResult<()>;
}
