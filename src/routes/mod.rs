//! # routes
//!
//! | Method | Path                     | Handler                               |
//! |--------|--------------------------|---------------------------------------|
//! | GET    | `/api/v1/market-data`    | [`market_data::get_market_data`]      |
//! | GET    | `/api/v1/market-tables`  | [`market_tables::get_market_tables`]  |
//! | GET    | `/health`                | [`health_check`]                      |

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::SharedState;

pub mod market_data;
pub mod market_tables;

use market_data::get_market_data;
use market_tables::get_market_tables;

/// All routes, state attached. Middleware is layered on in `main`.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/market-data",   get(get_market_data))
        .route("/api/v1/market-tables", get(get_market_tables))
        .route("/health",               get(health_check))
        .with_state(state)
}

/// Liveness probe. Does not touch Redis or the renderer.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "ok": true }))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
