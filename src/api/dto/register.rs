//! DTOs for alias registration.

use crate::utils::alias_validator::ALIAS_REGEX;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Form body of `POST /add`.
///
/// Empty fields are treated as absent, so `alias=` asks for a generated alias.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    /// Optional alias; a default one is synthesized when omitted.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(min = 1, max = 64, message = "Alias must be 1-64 characters"))]
    #[validate(regex(path = *ALIAS_REGEX, message = "Alias can only contain lowercase letters a-z"))]
    pub alias: Option<String>,

    /// Redirect target (must be an absolute HTTP/HTTPS URL).
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(required(message = "URL is required"))]
    #[validate(url(message = "wrong URL format"))]
    pub url: Option<String>,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub alias: String,
    pub url: String,
    pub message: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decodes `key=value&...` pairs the way a form body arrives.
    fn parse(body: &str) -> RegisterForm {
        let pairs: serde_json::Map<String, serde_json::Value> = body
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(pairs)).unwrap()
    }

    #[test]
    fn test_empty_alias_is_absent() {
        let form = parse("alias=&url=https://example.com");
        assert_eq!(form.alias, None);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_missing_url_fails_validation() {
        let form = parse("alias=docs");
        assert!(form.validate().is_err());

        let form = parse("alias=docs&url=");
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_invalid_alias_fails_validation() {
        let form = parse("alias=Docs-2&url=https://example.com");
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("alias"));
    }

    #[test]
    fn test_valid_form() {
        let form = parse("alias=docs&url=https://docs.rs");
        assert_eq!(form.alias.as_deref(), Some("docs"));
        assert_eq!(form.url.as_deref(), Some("https://docs.rs"));
        assert!(form.validate().is_ok());
    }
}
