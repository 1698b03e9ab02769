//! # engine::parser
//!
//! **RecordParser**: turns one raw Redis value into a typed record.
//!
//! ## Wire format
//!
//! ```text
//! market   : symbol;expiration;last;adjustment;high;low;open;close;volume;traded;change;month%;year%;timestamp
//! currency : symbol;last;change;percentChange;timestamp
//! ```
//!
//! Anything that does not fit is answered with `None`. Malformed entries are
//! an expected part of the feed, so they are dropped quietly and never turned
//! into errors.

use tracing::debug;

use crate::models::{CurrencyRecord, MarketRecord};

const FIELD_SEPARATOR: char = ';';
const MARKET_FIELD_COUNT: usize = 14;
const CURRENCY_FIELD_COUNT: usize = 5;

// ─── Market Records ───────────────────────────────────────────────────────────

/// Parse one futures contract entry. `None` if it is structurally malformed.
pub fn parse_market_data(raw: &str) -> Option<MarketRecord> {
    let fields = split_fields(raw, MARKET_FIELD_COUNT)?;

    let symbol          = non_empty(fields[0])?;
    let expiration_date = non_empty(fields[1])?;
    let last_price      = numeric(strip_settlement_flag(fields[2])).map(|_| fields[2])?;

    Some(MarketRecord {
        symbol,
        expiration_date,
        last_price:       last_price.to_string(),
        adjustment:       numeric(fields[3])?,
        high:             numeric(fields[4])?,
        low:              numeric(fields[5])?,
        open:             numeric(fields[6])?,
        close:            numeric(fields[7])?,
        volume:           numeric(fields[8])?,
        contracts_traded: numeric(fields[9])?,
        change:           numeric(fields[10])?,
        month_change:     numeric(fields[11])?,
        year_change:      numeric(fields[12])?,
        timestamp:        fields[13].parse().ok()?,
    })
}

/// Parse one FX entry. `None` if it is structurally malformed.
pub fn parse_currency_data(raw: &str) -> Option<CurrencyRecord> {
    let fields = split_fields(raw, CURRENCY_FIELD_COUNT)?;

    Some(CurrencyRecord {
        symbol:         non_empty(fields[0])?,
        last_price:     numeric(fields[1])?,
        change:         numeric(fields[2])?,
        percent_change: fields[3].to_string(),
        timestamp:      fields[4].parse().ok()?,
    })
}

/// Parse a whole batch, dropping what does not parse.
pub fn parse_all_market(raw: &[String]) -> Vec<MarketRecord> {
    let parsed: Vec<_> = raw.iter().filter_map(|r| parse_market_data(r)).collect();
    log_dropped("market", raw.len(), parsed.len());
    parsed
}

/// Parse a whole batch of FX entries, dropping what does not parse.
pub fn parse_all_currency(raw: &[String]) -> Vec<CurrencyRecord> {
    let parsed: Vec<_> = raw.iter().filter_map(|r| parse_currency_data(r)).collect();
    log_dropped("currency", raw.len(), parsed.len());
    parsed
}

/// Remove the single trailing settlement flag (`"1012.25S"` → `"1012.25"`).
pub fn strip_settlement_flag(value: &str) -> &str {
    value.strip_suffix(|c: char| c.is_ascii_alphabetic()).unwrap_or(value)
}

// ─── Field Helpers ────────────────────────────────────────────────────────────

fn split_fields(raw: &str, expected: usize) -> Option<Vec<&str>> {
    let fields: Vec<&str> = raw.trim().split(FIELD_SEPARATOR).map(str::trim).collect();
    (fields.len() == expected).then_some(fields)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Keeps the feed's spelling, but only if it reads as a finite number.
fn numeric(value: &str) -> Option<String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|_| value.to_string())
}

fn log_dropped(kind: &str, total: usize, kept: usize) {
    if kept < total {
        debug!(kind, total, dropped = total - kept, "Unparseable feed entries skipped");
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const SOY: &str = "ZSF25;JAN/25;1012.25S;1010.00;1015.50;1005.75;1008.00;1009.25;412345;98765;3.00;-1.2345;4.5;1700000000";
    const DOL: &str = "WDOFUT-DOL;5.1234;0.0123;+0,24%;1700000100";

    #[test]
    fn test_parse_valid_market_record() {
        let rec = parse_market_data(SOY).unwrap();
        assert_eq!(rec.symbol, "ZSF25");
        assert_eq!(rec.expiration_date, "JAN/25");
        assert_eq!(rec.last_price, "1012.25S");
        assert_eq!(rec.close, "1009.25");
        assert_eq!(rec.month_change, "-1.2345");
        assert_eq!(rec.timestamp, 1_700_000_000);
    }

    #[test]
    fn test_parse_trims_whitespace_around_fields() {
        let spaced = SOY.replace(';', " ; ");
        assert_eq!(parse_market_data(&spaced), parse_market_data(SOY));
    }

    #[test]
    fn test_wrong_field_count_rejected() {
        assert!(parse_market_data("ZSF25;JAN/25;1012.25").is_none());
        assert!(parse_market_data(&format!("{SOY};extra")).is_none());
        assert!(parse_currency_data("WDOFUT-DOL;5.1").is_none());
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let bad_high = SOY.replace("1015.50", "abc");
        assert!(parse_market_data(&bad_high).is_none());

        let bad_price = SOY.replace("1012.25S", "S");
        assert!(parse_market_data(&bad_price).is_none());
    }

    #[test]
    fn test_non_integer_timestamp_rejected() {
        let bad_ts = SOY.replace("1700000000", "1700000000.5");
        assert!(parse_market_data(&bad_ts).is_none());
    }

    #[test]
    fn test_empty_symbol_rejected() {
        assert!(parse_market_data(&SOY.replace("ZSF25", "")).is_none());
        assert!(parse_currency_data(&DOL.replace("WDOFUT-DOL", "")).is_none());
    }

    #[test]
    fn test_garbage_never_panics() {
        for raw in ["", ";", "{\"json\":true}", ";;;;;;;;;;;;;", "\u{0}\u{1}"] {
            assert!(parse_market_data(raw).is_none());
            assert!(parse_currency_data(raw).is_none());
        }
    }

    #[test]
    fn test_parse_valid_currency_record() {
        let rec = parse_currency_data(DOL).unwrap();
        assert_eq!(rec.symbol, "WDOFUT-DOL");
        assert_eq!(rec.last_price, "5.1234");
        assert_eq!(rec.percent_change, "+0,24%");
        assert_eq!(rec.timestamp, 1_700_000_100);
    }

    #[test]
    fn test_batch_drops_exactly_the_malformed_entries() {
        let raw = vec![
            SOY.to_string(),
            "garbage".to_string(),
            SOY.replace("1700000000", "1700000060"),
        ];
        assert_eq!(parse_all_market(&raw).len(), 2);
    }

    #[test]
    fn test_strip_settlement_flag() {
        assert_eq!(strip_settlement_flag("1012.25S"), "1012.25");
        assert_eq!(strip_settlement_flag("1012.25"), "1012.25");
        assert_eq!(strip_settlement_flag("1012.25AB"), "1012.25A");
    }

    #[test]
    fn test_more_than_one_flag_letter_rejected() {
        assert!(parse_market_data(&SOY.replace("1012.25S", "1012.25ABC")).is_none());
    }
}
