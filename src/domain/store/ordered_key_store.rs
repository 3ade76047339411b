//! Trait for the ordered alias container.

use super::ScanRange;

/// Errors reported by the store's conditional mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("key \"{0}\" already exists")]
    KeyExists(String),

    #[error("key \"{0}\" does not exist")]
    KeyMissing(String),
}

/// An ordered associative container of unique string keys.
///
/// Keys are ordered byte-lexicographically. Implementations are not expected
/// to synchronize internally: readers receive `&self` and writers `&mut self`
/// from the gate that owns the store.
#[cfg_attr(test, mockall::automock)]
pub trait OrderedKeyStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Inserts `key -> value` only when `key` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyExists`] and leaves the store untouched if the
    /// key is already present.
    fn insert_if_absent(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key` only when it is present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::KeyMissing`] if the key is absent.
    fn delete_if_present(&mut self, key: &str) -> Result<(), StoreError>;

    /// Returns the entry with the greatest key, or `None` when empty.
    fn maximum(&self) -> Option<(String, String)>;

    /// Returns every entry whose key falls inside `range`, in ascending key order.
    ///
    /// Calling it again with the same range under the same ticket yields the
    /// same sequence.
    fn range_ascending(&self, range: &ScanRange) -> Vec<(String, String)>;

    /// Number of entries currently stored.
    fn entry_count(&self) -> usize;
}
