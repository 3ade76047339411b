//! Directory endpoint routing.

use crate::api::handlers::{redirect_handler, register_handler, remove_handler, search_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Routes for the four directory operations.
///
/// # Endpoints
///
/// - `GET    /go/{alias}`         - Redirect to the alias target
/// - `GET    /search?prefix=...`  - List aliases starting with a prefix
/// - `POST   /add`                - Register a target (form: `alias`, `url`)
/// - `DELETE /delete?alias=...`   - Remove an alias
///
/// Any other method on these paths yields `405 Method Not Allowed`.
pub fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/go/{alias}", get(redirect_handler))
        .route("/search", get(search_handler))
        .route("/add", post(register_handler))
        .route("/delete", delete(remove_handler))
}
