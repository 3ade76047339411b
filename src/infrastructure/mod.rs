//! Infrastructure layer for concrete store implementations.
//!
//! # Modules
//!
//! - [`memory`] - In-process ordered store backing the directory

pub mod memory;
