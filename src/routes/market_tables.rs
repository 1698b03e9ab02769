//! # routes::market_tables
//!
//! `GET /api/v1/market-tables`: one rendered image per commodity, base64.
//!
//! ```text
//! FX keys → FX values → resolve dollar/euro          (failure ⇒ 500)
//!        ┌────────────────────┴───────────────────┐
//!   SOJA table task                         MILHO table task
//!   keys → values → parse → sort            keys → values → parse → sort
//!   → layout → render → base64              → layout → render → base64
//!   (failure ⇒ "")                          (failure ⇒ "")
//! ```

use std::future::Future;

use axum::{
    extract::State,
    http::header::{CACHE_CONTROL, EXPIRES, PRAGMA},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use tracing::{error, info};

use crate::{
    engine::{
        currency::resolve,
        ordering::sort_by_time,
        parser::{parse_all_currency, parse_all_market},
    },
    error::{AppError, TableError},
    models::{snapshot::iso_timestamp, CurrencyPair, TablesPayload, TablesResponse},
    state::{AppState, SharedState},
    store::{fetcher::Commodity, SnapshotFetcher},
};

const NO_CACHE: [(axum::http::HeaderName, &str); 3] = [
    (CACHE_CONTROL, "no-store, no-cache, must-revalidate, proxy-revalidate"),
    (PRAGMA, "no-cache"),
    (EXPIRES, "0"),
];

// ─── GET /api/v1/market-tables ────────────────────────────────────────────────

pub async fn get_market_tables(State(state): State<SharedState>) -> Response {
    match build_tables(&state).await {
        Ok(body) => (NO_CACHE, Json(body)).into_response(),
        Err(e) => {
            error!(error = %e, "Error generating market data tables");
            e.into_response()
        }
    }
}

async fn build_tables(state: &AppState) -> Result<TablesResponse, AppError> {
    let fetcher = state.fetcher.as_ref().ok_or(AppError::ConfigurationMissing)?;

    let currency_keys = fetcher.currency_keys().await?;
    let currency_raw = fetcher.fetch(&currency_keys).await?;
    let currency = resolve(&parse_all_currency(&currency_raw));

    let (base64_soja, base64_milho) = tokio::join!(
        degrade(Commodity::Soybean, table_image(state, fetcher, Commodity::Soybean, &currency)),
        degrade(Commodity::Corn, table_image(state, fetcher, Commodity::Corn, &currency)),
    );

    Ok(TablesResponse {
        tabelas: TablesPayload { base64_soja, base64_milho },
        timestamp: iso_timestamp(Utc::now()),
    })
}

// ─── Per-table Task ───────────────────────────────────────────────────────────

/// Isolated join member: its failure is logged and becomes `""`.
async fn degrade<F>(commodity: Commodity, task: F) -> String
where
    F: Future<Output = Result<String, TableError>>,
{
    match task.await {
        Ok(encoded) => encoded,
        Err(e) => {
            error!(table = commodity.title(), error = %e, "Table generation failed");
            String::new()
        }
    }
}

async fn table_image(
    state: &AppState,
    fetcher: &SnapshotFetcher,
    commodity: Commodity,
    currency: &CurrencyPair,
) -> Result<String, TableError> {
    let keys = fetcher.contract_keys(commodity).await?;
    let raw = fetcher.fetch(&keys).await?;
    let records = sort_by_time(parse_all_market(&raw));

    let model = state.layout.build(
        &records,
        commodity.title(),
        currency.dollar.as_ref(),
        currency.euro.as_ref(),
    );
    let image = state.renderer.render(&model, &state.canvas).await?;

    info!(table = commodity.title(), columns = model.columns, bytes = image.len(), "Table generated");
    Ok(STANDARD.encode(image))
}
