//! # store::fetcher
//!
//! **KeyDiscovery / SnapshotFetcher**: knows where the feed puts each kind
//! of entry and pulls raw strings out of a [`KeyValueStore`].
//!
//! Key naming:
//!
//! ```text
//! <CONTRACT_KEY_PREFIX>ZS…   soybean contracts
//! <CONTRACT_KEY_PREFIX>ZC…   corn contracts
//! <CURRENCY_KEY_PREFIX>…     FX quotes
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::store::{KeyValueStore, StoreResult};

/// CBOT roots served by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commodity {
    Soybean,
    Corn,
}

impl Commodity {
    pub fn root(self) -> &'static str {
        match self {
            Commodity::Soybean => "ZS",
            Commodity::Corn    => "ZC",
        }
    }

    /// Title printed on the rendered table.
    pub fn title(self) -> &'static str {
        match self {
            Commodity::Soybean => "SOJA",
            Commodity::Corn    => "MILHO",
        }
    }
}

#[derive(Clone)]
pub struct SnapshotFetcher {
    store:           Arc<dyn KeyValueStore>,
    contract_prefix: String,
    currency_prefix: String,
}

impl SnapshotFetcher {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        contract_prefix: impl Into<String>,
        currency_prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            contract_prefix: contract_prefix.into(),
            currency_prefix: currency_prefix.into(),
        }
    }

    /// Keys of every contract of one commodity, sorted and unique.
    pub async fn contract_keys(&self, commodity: Commodity) -> StoreResult<Vec<String>> {
        let prefix = format!("{}{}", self.contract_prefix, commodity.root());
        self.sorted_keys(&prefix).await
    }

    /// Keys of every FX quote, sorted and unique.
    pub async fn currency_keys(&self) -> StoreResult<Vec<String>> {
        self.sorted_keys(&self.currency_prefix).await
    }

    /// Raw values in key order. An empty key list never reaches the store.
    pub async fn fetch(&self, keys: &[String]) -> StoreResult<Vec<String>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        self.store.get_many(keys).await
    }

    /// A store scan may report the same key twice.
    async fn sorted_keys(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let mut keys = self.store.keys_with_prefix(prefix).await?;
        keys.sort();
        keys.dedup();
        debug!(prefix, count = keys.len(), "Keys discovered");
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::store::MemoryStore;

    /// Reports every listed key twice, the way a Redis `SCAN` can.
    struct RepeatingScanStore(MemoryStore);

    #[async_trait]
    impl KeyValueStore for RepeatingScanStore {
        async fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
            let keys = self.0.keys_with_prefix(prefix).await?;
            Ok(keys.iter().chain(keys.iter()).cloned().collect())
        }

        async fn get_many(&self, keys: &[String]) -> StoreResult<Vec<String>> {
            self.0.get_many(keys).await
        }
    }

    fn fetcher() -> SnapshotFetcher {
        let store = MemoryStore::from_entries([
            ("ZSN25", "n"),
            ("ZSF25", "f"),
            ("ZCH25", "c"),
            ("FX:WDO-DOL", "d"),
        ]);
        SnapshotFetcher::new(Arc::new(store), "", "FX:")
    }

    #[tokio::test]
    async fn test_contract_keys_sorted_per_root() {
        let f = fetcher();
        assert_eq!(f.contract_keys(Commodity::Soybean).await.unwrap(), vec!["ZSF25", "ZSN25"]);
        assert_eq!(f.contract_keys(Commodity::Corn).await.unwrap(), vec!["ZCH25"]);
        assert_eq!(f.currency_keys().await.unwrap(), vec!["FX:WDO-DOL"]);
    }

    #[tokio::test]
    async fn test_fetch_preserves_key_order() {
        let f = fetcher();
        let keys = vec!["ZSN25".to_string(), "ZSF25".to_string()];
        assert_eq!(f.fetch(&keys).await.unwrap(), vec!["n", "f"]);
        assert!(f.fetch(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_contract_prefix_is_prepended() {
        let store = MemoryStore::from_entries([("cbot:ZSF25", "f"), ("ZSH25", "h")]);
        let f = SnapshotFetcher::new(Arc::new(store), "cbot:", "FX:");
        assert_eq!(f.contract_keys(Commodity::Soybean).await.unwrap(), vec!["cbot:ZSF25"]);
    }

    #[tokio::test]
    async fn test_repeated_scan_keys_collapse() {
        let store = RepeatingScanStore(MemoryStore::from_entries([
            ("ZSF25", "f"),
            ("ZSH25", "h"),
            ("FX:WDO-DOL", "d"),
        ]));
        let f = SnapshotFetcher::new(Arc::new(store), "", "FX:");

        let keys = f.contract_keys(Commodity::Soybean).await.unwrap();
        assert_eq!(keys, vec!["ZSF25", "ZSH25"]);
        assert_eq!(f.fetch(&keys).await.unwrap(), vec!["f", "h"]);
        assert_eq!(f.currency_keys().await.unwrap(), vec!["FX:WDO-DOL"]);
    }
}
