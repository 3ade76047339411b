//! Application layer: access coordination and service orchestration.
//!
//! # Modules
//!
//! - [`gate`] - [`gate::WriterPreferenceGate`], the only path to the directory store
//! - [`services`] - [`services::DirectoryService`], the four directory operations
//!
//! Handlers never touch the store or the gate directly; they call the service,
//! which holds a shared handle to the gate.

pub mod gate;
pub mod services;
