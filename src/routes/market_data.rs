//! # routes::market_data
//!
//! `GET /api/v1/market-data`: the raw JSON snapshot.
//!
//! Always `200 OK`. Missing configuration or any failure along the way is
//! reported inside the body (`error: true`), never through the status code.
//! Records are passed through as parsed: no sort, no dedupe.

use axum::{extract::State, Json};
use tracing::{error, info};

use crate::{
    engine::{
        aggregator::aggregate,
        parser::{parse_all_currency, parse_all_market},
    },
    models::Snapshot,
    state::SharedState,
    store::{fetcher::Commodity, SnapshotFetcher, StoreResult},
};

// ─── GET /api/v1/market-data ──────────────────────────────────────────────────

pub async fn get_market_data(State(state): State<SharedState>) -> Json<Snapshot> {
    let Some(fetcher) = state.fetcher.as_ref() else {
        error!("Redis environment variables missing");
        return Json(Snapshot::failure("Redis configuration is missing"));
    };

    match collect_snapshot(fetcher).await {
        Ok(snapshot) => Json(snapshot),
        Err(e) => {
            error!(error = %e, "Market data request failed");
            Json(Snapshot::failure(e.to_string()))
        }
    }
}

/// Both joins are fail-fast: one failed batch fails the whole snapshot.
async fn collect_snapshot(fetcher: &SnapshotFetcher) -> StoreResult<Snapshot> {
    info!("Fetching market data...");

    let (soybean_keys, corn_keys, currency_keys) = tokio::try_join!(
        fetcher.contract_keys(Commodity::Soybean),
        fetcher.contract_keys(Commodity::Corn),
        fetcher.currency_keys(),
    )?;

    info!(
        soybean  = soybean_keys.len(),
        corn     = corn_keys.len(),
        currency = currency_keys.len(),
        "Keys found"
    );

    let (soybean_raw, corn_raw, currency_raw) = tokio::try_join!(
        fetcher.fetch(&soybean_keys),
        fetcher.fetch(&corn_keys),
        fetcher.fetch(&currency_keys),
    )?;

    let soybean  = parse_all_market(&soybean_raw);
    let corn     = parse_all_market(&corn_raw);
    let currency = parse_all_currency(&currency_raw);

    info!(
        soybean  = soybean.len(),
        corn     = corn.len(),
        currency = currency.len(),
        "Market data processed"
    );

    Ok(aggregate(soybean, corn, &currency))
}
