//! Handler for alias removal.

use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::remove::RemoveQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Removes an alias from the directory.
///
/// # Endpoint
///
/// `DELETE /delete?alias={alias}`
///
/// # Errors
///
/// Returns 400 Bad Request if `alias` is missing.
/// Returns 409 Conflict if the alias does not exist (already removed or never
/// registered).
pub async fn remove_handler(
    Query(query): Query<RemoveQuery>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.directory.remove(&query.alias).await?;
    Ok(StatusCode::NO_CONTENT)
}
