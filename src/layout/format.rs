//! # layout::format
//!
//! Display formatting for the table: pt-BR number grouping, signed
//! percentages and Brasília wall-clock time.

use chrono::{DateTime, Duration, Utc};

/// Brasília is treated as a fixed UTC−3 offset.
const BRASILIA_OFFSET_HOURS: i64 = 3;

/// Shown wherever a value is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Group with `.` for thousands and `,` for decimals: `1234.5` → `"1.234,50"`.
pub fn group_decimal(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, round_half_away(value.abs(), decimals));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// FX price with exactly four decimals, or [`NOT_AVAILABLE`].
pub fn format_fx_price(raw: &str) -> String {
    parse_number(raw)
        .map(|v| group_decimal(v, 4))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `+X.XX%` for non-negative values, `-X.XX%` otherwise.
pub fn signed_percent(raw: &str) -> String {
    match parse_number(raw) {
        Some(v) if v >= 0.0 => format!("+{:.2}%", round_half_away(v.abs(), 2)),
        Some(v) => format!("-{:.2}%", round_half_away(v.abs(), 2)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// True when `raw` reads as a number ≥ 0. Unparseable counts as negative.
pub fn is_non_negative(raw: &str) -> bool {
    parse_number(raw).is_some_and(|v| v >= 0.0)
}

/// `DD/MM/YYYY` in Brasília time.
pub fn brasilia_date(now: DateTime<Utc>) -> String {
    to_brasilia(now).format("%d/%m/%Y").to_string()
}

/// `DD/MM/YYYY HH:MM:SS` in Brasília time.
pub fn brasilia_datetime(now: DateTime<Utc>) -> String {
    to_brasilia(now).format("%d/%m/%Y %H:%M:%S").to_string()
}

fn to_brasilia(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(BRASILIA_OFFSET_HOURS)
}

/// Ties go away from zero (`1.625` → `1.63`); `format!` alone would pick the
/// even digit.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fx_price_four_decimals_with_comma() {
        assert_eq!(format_fx_price("5"), "5,0000");
        assert_eq!(format_fx_price("5.12347"), "5,1235");
        assert_eq!(format_fx_price("1234.5"), "1.234,5000");
        assert_eq!(format_fx_price("1234567.1"), "1.234.567,1000");
        assert_eq!(format_fx_price("oops"), "N/A");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(signed_percent("1.625"), "+1.63%");
        assert_eq!(signed_percent("0.125"), "+0.13%");
        assert_eq!(signed_percent("-0.375"), "-0.38%");
        assert_eq!(format_fx_price("0.03125"), "0,0313");
        assert_eq!(group_decimal(-2.5, 0), "-3");
    }

    #[test]
    fn test_group_decimal_small_and_negative() {
        assert_eq!(group_decimal(999.0, 2), "999,00");
        assert_eq!(group_decimal(-1000.0, 0), "-1.000");
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent("-1.2345"), "-1.23%");
        assert_eq!(signed_percent("2.5"), "+2.50%");
        assert_eq!(signed_percent("0"), "+0.00%");
        assert_eq!(signed_percent("-0.0"), "+0.00%");
        assert_eq!(signed_percent("x"), "N/A");
    }

    #[test]
    fn test_is_non_negative() {
        assert!(is_non_negative("0"));
        assert!(is_non_negative("3.5"));
        assert!(!is_non_negative("-0.01"));
        assert!(!is_non_negative(""));
    }

    #[test]
    fn test_brasilia_crosses_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 2, 30, 0).unwrap();
        assert_eq!(brasilia_date(now), "31/12/2023");
        assert_eq!(brasilia_datetime(now), "31/12/2023 23:30:00");
    }
}
