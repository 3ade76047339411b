//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::gate::WriterPreferenceGate;
use crate::application::services::DirectoryService;
use crate::infrastructure::memory::BTreeMapStore;

/// Directory service over the in-memory store.
pub type Directory = DirectoryService<BTreeMapStore>;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
}

impl AppState {
    /// Builds state around an existing gate handle.
    pub fn new(gate: Arc<WriterPreferenceGate<BTreeMapStore>>) -> Self {
        Self {
            directory: Arc::new(DirectoryService::new(gate)),
        }
    }

    /// Builds state around an empty in-memory directory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(WriterPreferenceGate::new(BTreeMapStore::new())))
    }
}
