//! # engine::aggregator
//!
//! **Aggregator**: assembles the JSON snapshot from the parsed batches.
//! Nothing is dropped or reordered here.

use chrono::Utc;

use crate::engine::currency;
use crate::models::{snapshot::iso_timestamp, CurrencyRecord, MarketRecord, Snapshot};

pub fn aggregate(
    soybean: Vec<MarketRecord>,
    corn: Vec<MarketRecord>,
    currency_records: &[CurrencyRecord],
) -> Snapshot {
    Snapshot {
        error:     false,
        message:   "Success".to_string(),
        soybean,
        corn,
        currency:  currency::resolve(currency_records),
        timestamp: iso_timestamp(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parser::{parse_currency_data, parse_market_data};

    #[test]
    fn test_aggregate_keeps_duplicates_and_order() {
        let a = parse_market_data("ZSF25;JAN/25;1;1;1;1;1;1;1;1;1;1;1;20").unwrap();
        let b = parse_market_data("ZSH25;MAR/25;1;1;1;1;1;1;1;1;1;1;1;20").unwrap();
        let fx = vec![
            parse_currency_data("EUROFUT-EURO;6.1;-0.1;-1,0%;1").unwrap(),
            parse_currency_data("WDOFUT-DOL;5.1;0.1;+1,0%;1").unwrap(),
        ];

        let snap = aggregate(vec![a.clone(), b.clone()], vec![], &fx);

        assert!(!snap.error);
        assert_eq!(snap.message, "Success");
        assert_eq!(snap.soybean, vec![a, b]);
        assert!(snap.corn.is_empty());
        assert_eq!(snap.currency.dollar.unwrap().symbol, "WDOFUT-DOL");
        assert_eq!(snap.currency.euro.unwrap().symbol, "EUROFUT-EURO");
    }
}
