//! # GrãoPainel: CBOT Grain & FX Market Snapshot Service
//!
//! ## Architecture Overview
//!
//! ```text
//!  ┌──────────────┐   writes ZS… / ZC… / FX:…   ┌──────────────────────┐
//!  │  Broadcast   │ ───────────────────────────▶│        Redis         │
//!  │  feed        │                             └──────────┬───────────┘
//!  └──────────────┘                                        │ SCAN + MGET
//!                                                          ▼
//!  ┌──────────────┐   GET /api/v1/market-data   ┌──────────────────────┐
//!  │  Dashboards  │ ◀──────────────────────────▶│   AppState           │
//!  │  & bots      │   GET /api/v1/market-tables │   SnapshotFetcher    │
//!  └──────────────┘                             │   TableLayoutBuilder │
//!                                               └──────────┬───────────┘
//!                                                          │ POST layout tree
//!                                                          ▼
//!                                               ┌──────────────────────┐
//!                                               │  Rasterizer (PNG)    │
//!                                               └──────────────────────┘
//! ```
//!
//! Configuration is read from the environment; see [`config`].

use axum::http::Method;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod engine;
mod error;
mod layout;
mod models;
mod render;
mod routes;
mod state;
mod store;

use config::AppConfig;
use state::build_state;

// ─── Entry Point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env (optional: deployments can use real env vars) ──────────
    dotenvy::dotenv().ok();

    // ── 2. Initialise structured logging ─────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env()
            .add_directive("graopainel=debug".parse()?)
            .add_directive("tower_http=info".parse()?))
        .init();

    info!(
        r#"

  ╔═══════════════════════════════════════════════╗
  ║        GRÃOPAINEL · CBOT Market Snapshot      ║
  ║        Rust + Axum  ·  Redis · Tables         ║
  ╚═══════════════════════════════════════════════╝"#
    );

    // ── 3. Configuration & shared state ──────────────────────────────────────
    let config = AppConfig::from_env()?;
    let state = build_state(&config)?;

    // ── 4. CORS: read-only public endpoints ──────────────────────────────────
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    // ── 5. Router + middleware ───────────────────────────────────────────────
    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!(addr = %config.bind_addr, "🚀 GrãoPainel server starting");

    // ── 6. Start the server ──────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
