//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /go/{alias}`
///
/// Responds with `303 See Other` and the target in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the alias is not registered.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let target = state.directory.resolve(&alias).await?;
    Ok(Redirect::to(&target))
}
