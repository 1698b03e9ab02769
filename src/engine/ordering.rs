//! # engine::ordering
//!
//! **Deduplicator** and **Sorter** over the feed timestamp.
//!
//! The table path sorts and then dedupes; the JSON snapshot path does
//! neither. Both functions are independent and composable.

use std::collections::HashSet;

use crate::models::MarketRecord;

/// Keep a record only if no earlier-kept record has the same timestamp.
/// Order of the survivors is preserved. Idempotent.
pub fn dedupe(records: &[MarketRecord]) -> Vec<MarketRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|r| seen.insert(r.timestamp))
        .cloned()
        .collect()
}

/// Stable ascending sort on timestamp.
pub fn sort_by_time(mut records: Vec<MarketRecord>) -> Vec<MarketRecord> {
    records.sort_by_key(|r| r.timestamp);
    records
}
