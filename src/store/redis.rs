//! Redis-backed [`KeyValueStore`].
//!
//! Keys are discovered with `SCAN MATCH <prefix>*` and read back in one
//! `MGET`. Each call opens its own multiplexed connection and drops it when
//! done.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, IntoConnectionInfo};
use tracing::debug;

use crate::config::RedisConfig;
use crate::store::{KeyValueStore, StoreError, StoreResult};

pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    /// Build the client. No connection is made until the first call.
    pub fn new(config: &RedisConfig) -> StoreResult<Self> {
        let mut info = config
            .url
            .as_str()
            .into_connection_info()
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        info.redis.password = Some(config.password.clone());

        let client = redis::Client::open(info).map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self { client })
    }

    async fn connection(&self) -> StoreResult<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let pattern = format!("{prefix}*");

        let mut keys = Vec::new();
        let mut iter = conn
            .scan_match::<_, String>(&pattern)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        while let Some(key) = iter.next_item().await {
            keys.push(key);
        }

        debug!(%pattern, found = keys.len(), "Redis key scan");
        Ok(keys)
    }

    async fn get_many(&self, keys: &[String]) -> StoreResult<Vec<String>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.connection().await?;
        let values: Vec<Option<String>> = redis::cmd("MGET")
            .arg(keys)
            .query_async(&mut conn)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        keys.iter()
            .zip(values)
            .map(|(key, value)| value.ok_or_else(|| StoreError::MissingKey(key.clone())))
            .collect()
    }
}
