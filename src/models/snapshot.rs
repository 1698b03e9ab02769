//! # models::snapshot
//!
//! Outward response bodies of the two `/api/v1` endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::{CurrencyPair, MarketRecord};

/// Body of `GET /api/v1/market-data`.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub error: bool,
    pub message: String,
    pub soybean: Vec<MarketRecord>,
    pub corn: Vec<MarketRecord>,
    pub currency: CurrencyPair,
    pub timestamp: String,
}

impl Snapshot {
    /// The degraded shape: empty curves, null currencies, `error = true`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error:     true,
            message:   message.into(),
            soybean:   Vec::new(),
            corn:      Vec::new(),
            currency:  CurrencyPair::default(),
            timestamp: iso_timestamp(Utc::now()),
        }
    }
}

/// Body of `GET /api/v1/market-tables`.
#[derive(Debug, Clone, Serialize)]
pub struct TablesResponse {
    pub tabelas: TablesPayload,
    pub timestamp: String,
}

/// Base64-encoded images. An empty string means that table failed.
#[derive(Debug, Clone, Serialize)]
pub struct TablesPayload {
    pub base64_soja: String,
    pub base64_milho: String,
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-01-01T12:00:00.000Z`.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_uses_millis_and_z() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(iso_timestamp(now), "2025-01-01T12:00:00.000Z");
    }

    #[test]
    fn test_failure_shape_serializes_null_currencies() {
        let body = serde_json::to_value(Snapshot::failure("boom")).unwrap();
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "boom");
        assert_eq!(body["soybean"].as_array().unwrap().len(), 0);
        assert_eq!(body["corn"].as_array().unwrap().len(), 0);
        assert!(body["currency"]["dollar"].is_null());
        assert!(body["currency"]["euro"].is_null());
    }
}
