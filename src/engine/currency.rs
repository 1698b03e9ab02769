//! # engine::currency
//!
//! **CurrencyResolver**: picks the dollar and euro quotes out of the FX batch.
//!
//! Matching is an unanchored substring test over the symbol and the first hit
//! in iteration order wins. A second `DOL` record is ignored silently.

use crate::models::{CurrencyPair, CurrencyRecord};

pub const DOLLAR_TAG: &str = "DOL";
pub const EURO_TAG: &str = "EURO";

/// Select the dollar and euro records. Missing slots stay `None`.
pub fn resolve(records: &[CurrencyRecord]) -> CurrencyPair {
    CurrencyPair {
        dollar: find_tagged(records, DOLLAR_TAG),
        euro:   find_tagged(records, EURO_TAG),
    }
}

fn find_tagged(records: &[CurrencyRecord], tag: &str) -> Option<CurrencyRecord> {
    records.iter().find(|r| r.symbol.contains(tag)).cloned()
}
