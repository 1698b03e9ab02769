//! In-memory [`KeyValueStore`], seeded by hand.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{KeyValueStore, StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from `(key, value)` pairs.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: RwLock::new(map) }
    }

    pub async fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().await.insert(key.into(), value.into());
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let entries = self.entries.read().await;
        Ok(entries.keys().filter(|k| k.starts_with(prefix)).cloned().collect())
    }

    async fn get_many(&self, keys: &[String]) -> StoreResult<Vec<String>> {
        let entries = self.entries.read().await;
        keys.iter()
            .map(|k| entries.get(k).cloned().ok_or_else(|| StoreError::MissingKey(k.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_prefix_listing_and_ordered_batch_get() {
        let store = MemoryStore::from_entries([("ZSF25", "a"), ("ZSH25", "b"), ("ZCH25", "c")]);
        store.insert("FX:DOL", "d").await;

        let mut keys = store.keys_with_prefix("ZS").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["ZSF25", "ZSH25"]);

        let values = store
            .get_many(&["ZSH25".to_string(), "FX:DOL".to_string()])
            .await
            .unwrap();
        assert_eq!(values, vec!["b", "d"]);
    }

    #[tokio::test]
    async fn test_missing_key_is_an_error() {
        let store = MemoryStore::new();
        let err = store.get_many(&["nope".to_string()]).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingKey(k) if k == "nope"));
    }
}
