//! Target URL validation.
//!
//! Targets are stored exactly as submitted; this module only decides whether a
//! string is an acceptable redirect destination.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("URL is required")]
    Missing,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must not contain control characters")]
    ControlCharacter,

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` is an absolute URL with an `http` or `https` scheme.
///
/// Rejects relative references as well as `javascript:`, `data:`, `file:` and
/// every other scheme.
///
/// # Errors
///
/// - [`TargetError::Missing`] for an empty string
/// - [`TargetError::ControlCharacter`] for tabs, line breaks and other control
///   characters, which the URL parser would silently strip but a `Location`
///   header cannot carry
/// - [`TargetError::InvalidFormat`] for anything `url` cannot parse
/// - [`TargetError::UnsupportedProtocol`] for non-HTTP(S) schemes
pub fn validate_target(input: &str) -> Result<(), TargetError> {
    if input.is_empty() {
        return Err(TargetError::Missing);
    }

    if input.chars().any(char::is_control) {
        return Err(TargetError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| TargetError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(TargetError::UnsupportedProtocol),
    }
}
