//! # models::currency
//!
//! FX quotes published by B3 next to the grain contracts. The feed computes
//! everything; this service only locates the right record.

use serde::{Deserialize, Serialize};

/// A single FX quote (`USD/BRL` or `EUR/BRL`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRecord {
    /// Feed symbol. Contains the currency tag (`"DOL"`, `"EURO"`).
    pub symbol: String,

    pub last_price: String,

    /// Signed absolute change. Its sign colours the percent text.
    pub change: String,

    /// Already formatted by the feed, e.g. `"+0,45%"`.
    pub percent_change: String,

    pub timestamp: i64,
}

/// The two FX slots of a snapshot. A slot is `None` when the feed has no
/// matching record; it serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CurrencyPair {
    pub dollar: Option<CurrencyRecord>,
    pub euro: Option<CurrencyRecord>,
}
