//! Cache Entry Module
//!
//! Defines the immutable key/value record stored in the ordering structure.

use bytes::Bytes;

// == Cache Entry ==
/// A single cache binding pairing a key with its value.
///
/// Entries are immutable once created; overwriting a key replaces the
/// whole entry rather than mutating it in place.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The binding's key
    key: String,
    /// The stored value
    value: Bytes,
}

impl Entry {
    // == Constructor ==
    /// Creates a new entry from a key and value.
    pub fn new(key: String, value: Bytes) -> Self {
        Self { key, value }
    }

    // == Key ==
    /// Returns the entry's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    // == Value ==
    /// Returns a reference to the stored value.
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    // == Size ==
    /// Returns the entry's accounted size in bytes.
    ///
    /// The accounting unit is the byte length of the key plus the byte
    /// length of the value, the same quantity the byte budget charges.
    pub fn size(&self) -> usize {
        self.key.len() + self.value.len()
    }

    // == Into Value ==
    /// Consumes the entry and returns the stored value.
    pub(crate) fn into_value(self) -> Bytes {
        self.value
    }
}
