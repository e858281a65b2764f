//! Document writer capability
//!
//! A writer knows its serialized size up front and renders itself straight
//! into a buffer the store has already sized, so inserts avoid an
//! intermediate copy.

use std::io;

/// Something that can serialize itself into a pre-sized buffer.
pub trait DocWriter {
    /// Exact number of bytes [`write_document`](Self::write_document) fills.
    fn document_size(&self) -> usize;

    /// Writes the document into `buf`, which is exactly `document_size()` bytes.
    fn write_document(&self, buf: &mut [u8]);
}

impl DocWriter for &[u8] {
    fn document_size(&self) -> usize {
        self.len()
    }

    fn write_document(&self, buf: &mut [u8]) {
        buf.copy_from_slice(self);
    }
}

impl DocWriter for Vec<u8> {
    fn document_size(&self) -> usize {
        self.len()
    }

    fn write_document(&self, buf: &mut [u8]) {
        buf.copy_from_slice(self);
    }
}

/// A JSON value written in compact form straight into the record buffer.
#[derive(Debug, Clone, Copy)]
pub struct JsonDocument<'a> {
    value: &'a serde_json::Value,
    size: usize,
}

impl<'a> JsonDocument<'a> {
    /// Measures the compact encoding of `value` without buffering it.
    pub fn new(value: &'a serde_json::Value) -> serde_json::Result<Self> {
        let mut counter = ByteCounter(0);
        serde_json::to_writer(&mut counter, value)?;
        Ok(Self {
            value,
            size: counter.0,
        })
    }

    /// Parses a stored record back into a JSON value.
    pub fn parse(data: &[u8]) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(data)
    }
}

impl DocWriter for JsonDocument<'_> {
    fn document_size(&self) -> usize {
        self.size
    }

    fn write_document(&self, buf: &mut [u8]) {
        let mut dest: &mut [u8] = buf;
        let result = serde_json::to_writer(&mut dest, self.value);
        debug_assert!(result.is_ok() && dest.is_empty());
    }
}

/// Counts bytes written and discards them.
struct ByteCounter(usize);

impl io::Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
