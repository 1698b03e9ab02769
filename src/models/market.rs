//! # models::market
//!
//! Defines [`MarketRecord`], one futures contract quote (a single maturity of
//! the soybean or corn curve) as parsed from the Redis feed.
//!
//! Numeric fields are kept as the feed's own strings: the JSON snapshot passes
//! them through untouched and the table only reformats the percentage rows.

use serde::{Deserialize, Serialize};

/// A single contract quote of a CBOT futures curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    /// Contract symbol, e.g. `"ZSF25"`.
    pub symbol: String,

    /// Display label of the maturity, e.g. `"JAN/25"`.
    pub expiration_date: String,

    /// Last traded price. May end with the settlement flag (`"1012.25S"`).
    pub last_price: String,

    pub adjustment: String,
    pub high: String,
    pub low: String,
    pub open: String,

    /// Previous session close.
    pub close: String,

    /// Open interest, labelled "volume" by the feed.
    pub volume: String,

    pub contracts_traded: String,

    /// Signed change versus the previous close.
    pub change: String,

    /// Signed month-to-date change, in percent.
    pub month_change: String,

    /// Signed year-to-date change, in percent.
    pub year_change: String,

    /// Feed-assigned instant. Monotonic per contract.
    pub timestamp: i64,
}

impl MarketRecord {
    /// Reads the string field a table row is bound to.
    pub fn field(&self, field: MarketField) -> &str {
        match field {
            MarketField::LastPrice       => &self.last_price,
            MarketField::Adjustment      => &self.adjustment,
            MarketField::High            => &self.high,
            MarketField::Low             => &self.low,
            MarketField::Open            => &self.open,
            MarketField::Close           => &self.close,
            MarketField::Volume          => &self.volume,
            MarketField::ContractsTraded => &self.contracts_traded,
            MarketField::Change          => &self.change,
            MarketField::MonthChange     => &self.month_change,
            MarketField::YearChange      => &self.year_change,
        }
    }
}

/// The displayable fields of a [`MarketRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketField {
    LastPrice,
    Adjustment,
    High,
    Low,
    Open,
    Close,
    Volume,
    ContractsTraded,
    Change,
    MonthChange,
    YearChange,
}
