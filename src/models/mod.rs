//! Domain models shared across the whole snapshot pipeline.

pub mod currency;
pub mod market;
pub mod snapshot;

pub use currency::{CurrencyPair, CurrencyRecord};
pub use market::MarketRecord;
pub use snapshot::{Snapshot, TablesPayload, TablesResponse};
