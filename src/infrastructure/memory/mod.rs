//! In-memory storage for the alias directory.
//!
//! Nothing is persisted: the directory lives for the lifetime of the process.

mod btree_store;

pub use btree_store::BTreeMapStore;
