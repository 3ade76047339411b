//! DTOs for prefix search.

use crate::domain::entities::Mapping;
use serde::{Deserialize, Serialize};

/// Query string of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub prefix: String,
}

/// One search hit.
#[derive(Debug, Serialize)]
pub struct AliasEntry {
    pub alias: String,
    pub url: String,
}

impl From<Mapping> for AliasEntry {
    fn from(mapping: Mapping) -> Self {
        Self {
            alias: mapping.alias,
            url: mapping.target,
        }
    }
}
