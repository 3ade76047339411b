//! Half-open key range used for ordered scans.

use crate::utils::prefix_bound::upper_bound_for;

/// A half-open range `[low, high)` over store keys.
///
/// `high == None` means the scan has no upper bound and runs to the end of
/// the key space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRange {
    pub low: String,
    pub high: Option<String>,
}

impl ScanRange {
    /// The range containing exactly the keys that start with `prefix`.
    pub fn for_prefix(prefix: &str) -> Self {
        Self {
            low: prefix.to_string(),
            high: upper_bound_for(prefix),
        }
    }

    /// Returns true if `key` lies inside the range.
    pub fn contains(&self, key: &str) -> bool {
        key >= self.low.as_str() && self.high.as_deref().is_none_or(|high| key < high)
    }

    /// Returns true if no key can satisfy the range.
    pub fn is_empty(&self) -> bool {
        self.high
            .as_deref()
            .is_some_and(|high| high <= self.low.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_prefix_bounds() {
        let range = ScanRange::for_prefix("ab");
        assert_eq!(range.low, "ab");
        assert_eq!(range.high.as_deref(), Some("ac"));
    }

    #[test]
    fn test_contains_prefix_matches_only() {
        let range = ScanRange::for_prefix("ab");
        for key in ["ab", "abc", "abz", "abzzzz"] {
            assert!(range.contains(key), "{key} should be in range");
        }
        for key in ["aa", "a", "ac", "b", "azz"] {
            assert!(!range.contains(key), "{key} should not be in range");
        }
    }

    #[test]
    fn test_unbounded_range() {
        let range = ScanRange {
            low: "m".to_string(),
            high: None,
        };
        assert!(range.contains("zzz"));
        assert!(!range.contains("a"));
        assert!(!range.is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = ScanRange {
            low: "b".to_string(),
            high: Some("a".to_string()),
        };
        assert!(range.is_empty());
    }
}
