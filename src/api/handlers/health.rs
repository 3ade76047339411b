//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with directory and gate status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "directory": { "status": "ok", "message": "Aliases: 12" },
///     "gate": { "status": "ok", "message": "Pending writes: 0" }
///   }
/// }
/// ```
///
/// The directory check takes a read ticket, so it waits behind pending writes
/// like any other read.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let pending_writes = state.directory.pending_writes();
    let aliases = state.directory.count().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            directory: CheckStatus::ok(format!("Aliases: {aliases}")),
            gate: CheckStatus::ok(format!("Pending writes: {pending_writes}")),
        },
    })
}
