//! # Box Storage Port
//!
//! Contract for the key-value slot that mirrors the box list.
//!
//! Implementations live in `shipbox_core::storage`. The store only ever
//! reads one slot at startup and rewrites it in full after each mutation,
//! so adapters do not need partial updates or locking. Two processes
//! sharing the same slot are not coordinated: the last writer wins.

use crate::error::StorageError;

/// Name of the slot holding the serialized box list.
pub const BOXES_SLOT: &str = "shippingBoxes";

pub trait BoxStorage {
    /// Returns the raw text stored under `key`.
    ///
    /// # Returns
    /// * `Ok(Some(text))` - the slot exists.
    /// * `Ok(None)` - nothing has been written yet.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the content of `key` with `value`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: BoxStorage + ?Sized> BoxStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}
