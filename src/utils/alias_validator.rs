//! Validation of caller-supplied aliases.
//!
//! Aliases share the alphabet of [`super::alias_synthesizer`] so that default
//! aliases derived from the maximum key never leave the `a`-`z` key space.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Longest alias a caller may register explicitly.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Compiled pattern for caller-supplied aliases.
pub static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+$").expect("alias pattern is valid"));

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: lowercase ASCII letters
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            format!("Alias must be 1-{MAX_ALIAS_LENGTH} characters"),
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Alias can only contain lowercase letters a-z",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

/// Rejects an empty alias on lookup and removal paths.
///
/// Lookups accept any other string: an alias outside the alphabet simply
/// cannot exist in the directory.
pub fn require_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        return Err(AppError::bad_request("alias is required", json!({})));
    }
    Ok(())
}
