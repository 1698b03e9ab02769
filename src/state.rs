//! # state
//!
//! Shared, read-only application state injected into every Axum handler.
//!
//! Nothing here is mutated after startup: each request builds its own
//! records and layout, so handlers never take a lock.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::layout::{TableLayoutBuilder, TableStyle};
use crate::render::{CanvasOptions, HttpRenderer, TableRenderer};
use crate::store::{KeyValueStore, RedisStore, SnapshotFetcher};

#[derive(Clone)]
pub struct AppState {
    /// `None` when Redis is not configured.
    pub fetcher:  Option<SnapshotFetcher>,
    pub renderer: Arc<dyn TableRenderer>,
    pub layout:   TableLayoutBuilder,
    pub canvas:   CanvasOptions,
}

impl AppState {
    pub fn new(
        fetcher: Option<SnapshotFetcher>,
        renderer: Arc<dyn TableRenderer>,
        layout: TableLayoutBuilder,
    ) -> Self {
        Self { fetcher, renderer, layout, canvas: CanvasOptions::default() }
    }
}

/// Convenience type alias
pub type SharedState = Arc<AppState>;

/// Wire the production collaborators from configuration.
pub fn build_state(config: &AppConfig) -> anyhow::Result<SharedState> {
    let fetcher = match &config.redis {
        Some(redis) => {
            let store: Arc<dyn KeyValueStore> = Arc::new(RedisStore::new(redis)?);
            Some(SnapshotFetcher::new(store, &config.contract_prefix, &config.currency_prefix))
        }
        None => {
            tracing::warn!("REDIS_URL / REDIS_PASSWORD not set; market endpoints will report missing configuration");
            None
        }
    };

    let mut style = TableStyle::default();
    if let Some(src) = &config.logo_url {
        style.logo.src = src.clone();
    }

    let renderer = Arc::new(HttpRenderer::new(reqwest::Client::new(), &config.render_url));
    let layout = TableLayoutBuilder::new(style).with_feed_name(&config.feed_name);

    Ok(Arc::new(AppState::new(fetcher, renderer, layout)))
}
