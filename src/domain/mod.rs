//! Domain layer: entities and the ordered store contract.
//!
//! - [`entities`] - Core data structures ([`entities::Mapping`])
//! - [`store`] - The [`store::OrderedKeyStore`] trait consumed by the directory
//!
//! The domain layer has no dependency on HTTP or on any concrete store; the
//! in-memory implementation lives in [`crate::infrastructure`].

pub mod entities;
pub mod store;
