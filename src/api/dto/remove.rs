//! DTOs for alias removal.

use serde::Deserialize;

/// Query string of `DELETE /delete`.
#[derive(Debug, Deserialize)]
pub struct RemoveQuery {
    #[serde(default)]
    pub alias: String,
}
