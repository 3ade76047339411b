//! HTTP request handlers for directory endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod redirect;
pub mod register;
pub mod remove;
pub mod search;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use register::register_handler;
pub use remove::remove_handler;
pub use search::search_handler;
