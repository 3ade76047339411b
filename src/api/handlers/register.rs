//! Handler for alias registration.

use axum::{Form, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::register::{RegisterForm, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a target URL under an alias.
///
/// # Endpoint
///
/// `POST /add` (`application/x-www-form-urlencoded`)
///
/// # Form Fields
///
/// - `url` - absolute HTTP/HTTPS target (required)
/// - `alias` - lowercase letters only (optional; generated when omitted)
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "alias": "docs",
///   "url": "https://docs.rs",
///   "message": "URL added successfully with alias \"docs\""
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a missing or malformed URL or alias.
/// Returns 409 Conflict if the alias is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Form(payload): Form<RegisterForm>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    payload.validate()?;

    let mapping = state
        .directory
        .register(payload.alias, payload.url.unwrap_or_default())
        .await?;

    let message = format!("URL added successfully with alias \"{}\"", mapping.alias);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            alias: mapping.alias,
            url: mapping.target,
            message,
        }),
    ))
}
