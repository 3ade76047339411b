//! Ordered key-value store contract.
//!
//! The directory keeps its mappings in an ordered container keyed by alias.
//! The container is consumed only through [`OrderedKeyStore`]; access is always
//! mediated by [`crate::application::gate::WriterPreferenceGate`], which
//! decides whether a caller gets `&S` or `&mut S`.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::memory::BTreeMapStore`] - `BTreeMap`-backed store
//! - Test mocks available with `cfg(test)`

mod ordered_key_store;
mod scan_range;

pub use ordered_key_store::{OrderedKeyStore, StoreError};
pub use scan_range::ScanRange;

#[cfg(test)]
pub use ordered_key_store::MockOrderedKeyStore;
