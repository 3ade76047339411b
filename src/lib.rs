//! # Alias Directory
//!
//! A concurrent, in-memory alias-to-URL directory built with Axum.
//!
//! Clients register short aliases for target URLs, follow them via redirect,
//! list them by prefix and remove them.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity and the ordered store contract
//! - **Application Layer** ([`application`]) - Writer-preference gate and directory service
//! - **Infrastructure Layer** ([`infrastructure`]) - `BTreeMap`-backed store
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs and middleware
//! - **Utilities** ([`utils`]) - Default alias synthesis, prefix bounds, validation
//!
//! ## Concurrency
//!
//! The directory is owned by a [`application::gate::WriterPreferenceGate`].
//! Reads share access; writes are exclusive, and a write that has been
//! admitted keeps new reads waiting until it finishes.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST -d 'alias=docs&url=https://docs.rs' localhost:8090/add
//! curl -i localhost:8090/go/docs
//! curl 'localhost:8090/search?prefix=do'
//! curl -X DELETE 'localhost:8090/delete?alias=docs'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::gate::WriterPreferenceGate;
    pub use crate::application::services::DirectoryService;
    pub use crate::domain::entities::Mapping;
    pub use crate::domain::store::{OrderedKeyStore, ScanRange, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::BTreeMapStore;
    pub use crate::state::AppState;
}
