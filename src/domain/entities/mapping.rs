//! Mapping entity: one live alias and the URL it redirects to.

/// A registered alias together with its target URL.
///
/// Mappings are created by a successful registration and destroyed by a
/// successful removal. There is no in-place update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub alias: String,
    pub target: String,
}

impl Mapping {
    pub fn new(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
        }
    }
}

impl From<(String, String)> for Mapping {
    fn from((alias, target): (String, String)) -> Self {
        Self { alias, target }
    }
}
