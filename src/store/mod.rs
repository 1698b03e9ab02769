//! # store
//!
//! The key-value cache the external feed writes into, behind one trait so the
//! routes never know whether they talk to Redis or to memory.
//!
//! | impl            | use                                       |
//! |-----------------|-------------------------------------------|
//! | [`RedisStore`]  | production, `REDIS_URL` + `REDIS_PASSWORD` |
//! | `MemoryStore`   | unit and router tests                     |

use async_trait::async_trait;

pub mod fetcher;
#[cfg(test)]
mod memory;
mod redis;

pub use fetcher::SnapshotFetcher;
#[cfg(test)]
pub use memory::MemoryStore;
pub use self::redis::RedisStore;

/// FetchFailure: the store could not answer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Key not found: {0}")]
    MissingKey(String),

    #[error("Store error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Every key starting with `prefix`, in no particular order.
    async fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>>;

    /// Values for `keys`, in the same order. A missing key is an error.
    async fn get_many(&self, keys: &[String]) -> StoreResult<Vec<String>>;
}
