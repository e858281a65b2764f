//! Record buffers and borrowed record views
//!
//! A record is sized once at creation and never resized. The store owns the
//! buffer; callers only ever see a [`RecordData`] borrowed from it.

/// An owned, fixed-size byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    data: Box<[u8]>,
}

impl Record {
    /// Creates a zero-filled record of exactly `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len].into_boxed_slice(),
        }
    }

    /// Creates a record holding a copy of `bytes`.
    pub fn copy_from(bytes: &[u8]) -> Self {
        Self {
            data: Box::from(bytes),
        }
    }

    /// Returns the record length in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Mutable access for in-place population before the record is stored.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Borrows a read-only view of the record.
    pub fn view(&self) -> RecordData<'_> {
        RecordData { data: &self.data }
    }
}

/// A read-only view over a stored record.
///
/// Valid only while the store keeps the entry; the borrow checker enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordData<'a> {
    data: &'a [u8],
}

impl<'a> RecordData<'a> {
    /// Returns the record bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the record length in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Copies the bytes out into an owned buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

impl AsRef<[u8]> for RecordData<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}
