//! `BTreeMap`-backed implementation of [`OrderedKeyStore`].

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ops::Bound;

use crate::domain::store::{OrderedKeyStore, ScanRange, StoreError};

/// Ordered in-memory store.
///
/// `BTreeMap<String, _>` orders keys by their UTF-8 bytes, which is the order
/// the directory promises for prefix scans.
#[derive(Debug, Default, Clone)]
pub struct BTreeMapStore {
    entries: BTreeMap<String, String>,
}

impl BTreeMapStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> FromIterator<(K, V)> for BTreeMapStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl OrderedKeyStore for BTreeMapStore {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn insert_if_absent(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(_) => Err(StoreError::KeyExists(key.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                Ok(())
            }
        }
    }

    fn delete_if_present(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::KeyMissing(key.to_string()))
    }

    fn maximum(&self) -> Option<(String, String)> {
        self.entries
            .last_key_value()
            .map(|(k, v)| (k.clone(), v.clone()))
    }

    fn range_ascending(&self, range: &ScanRange) -> Vec<(String, String)> {
        // BTreeMap::range panics on inverted bounds.
        if range.is_empty() {
            return Vec::new();
        }

        let upper = match range.high.as_deref() {
            Some(high) => Bound::Excluded(high),
            None => Bound::Unbounded,
        };

        self.entries
            .range::<str, _>((Bound::Included(range.low.as_str()), upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> BTreeMapStore {
        ["ab", "abc", "abz", "ac", "b"]
            .into_iter()
            .map(|k| (k, format!("https://example.com/{k}")))
            .collect()
    }

    #[test]
    fn test_insert_if_absent_rejects_duplicates() {
        let mut store = BTreeMapStore::new();
        assert!(store.insert_if_absent("go", "https://a.com").is_ok());

        let err = store.insert_if_absent("go", "https://b.com").unwrap_err();
        assert_eq!(err, StoreError::KeyExists("go".to_string()));
        assert_eq!(store.lookup("go").as_deref(), Some("https://a.com"));
    }

    #[test]
    fn test_delete_if_present() {
        let mut store = sample_store();
        assert!(store.delete_if_present("abc").is_ok());
        assert_eq!(store.lookup("abc"), None);

        let err = store.delete_if_present("abc").unwrap_err();
        assert_eq!(err, StoreError::KeyMissing("abc".to_string()));
        assert_eq!(store.entry_count(), 4);
    }

    #[test]
    fn test_maximum() {
        assert_eq!(BTreeMapStore::new().maximum(), None);

        let (key, _) = sample_store().maximum().unwrap();
        assert_eq!(key, "b");
    }

    #[test]
    fn test_range_ascending_prefix() {
        let store = sample_store();
        let keys: Vec<String> = store
            .range_ascending(&ScanRange::for_prefix("ab"))
            .into_iter()
            .map(|(k, _)| k)
            .collect();

        assert_eq!(keys, vec!["ab", "abc", "abz"]);
    }

    #[test]
    fn test_range_ascending_is_repeatable() {
        let store = sample_store();
        let range = ScanRange::for_prefix("a");
        assert_eq!(store.range_ascending(&range), store.range_ascending(&range));
        assert_eq!(store.range_ascending(&range).len(), 4);
    }

    #[test]
    fn test_range_ascending_unbounded() {
        let store = sample_store();
        let range = ScanRange {
            low: "ac".to_string(),
            high: None,
        };
        let keys: Vec<String> = store
            .range_ascending(&range)
            .into_iter()
            .map(|(k, _)| k)
            .collect();

        assert_eq!(keys, vec!["ac", "b"]);
    }

    #[test]
    fn test_range_ascending_inverted_is_empty() {
        let store = sample_store();
        let range = ScanRange {
            low: "b".to_string(),
            high: Some("a".to_string()),
        };
        assert!(store.range_ascending(&range).is_empty());
    }
}
