//! Handler for prefix search.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::search::{AliasEntry, SearchQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Lists aliases starting with a prefix.
///
/// # Endpoint
///
/// `GET /search?prefix={prefix}`
///
/// # Response
///
/// Matches in ascending alias order:
///
/// ```json
/// [
///   { "alias": "ab", "url": "https://example.com/ab" },
///   { "alias": "abc", "url": "https://example.com/abc" }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `prefix` is missing or empty.
pub async fn search_handler(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<AliasEntry>>, AppError> {
    let mappings = state.directory.search(&query.prefix).await?;
    Ok(Json(mappings.into_iter().map(AliasEntry::from).collect()))
}
