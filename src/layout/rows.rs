//! # layout::rows
//!
//! The fixed, ordered catalog of table rows.
//!
//! Each [`RowRule`] says which [`MarketField`] it reads and how to turn it into
//! a cell. Cell text is resolved in a fixed priority:
//!
//! ```text
//! custom value fn  >  transform fn on the field  >  raw field
//! ```
//!
//! and cell colour is the per-record colour rule if there is one, else the
//! row's fixed text token.

use crate::engine::parser::strip_settlement_flag;
use crate::layout::format::{is_non_negative, signed_percent};
use crate::layout::style::ColorToken;
use crate::models::{market::MarketField, MarketRecord};

/// Computes a whole cell from the record.
pub type ValueFn = fn(&MarketRecord) -> String;
/// Rewrites the raw field text.
pub type TransformFn = fn(&str) -> String;
/// Picks a colour per record.
pub type ColorFn = fn(&MarketRecord) -> ColorToken;

#[derive(Clone, Copy)]
pub enum RowColor {
    Fixed(ColorToken),
    PerRecord(ColorFn),
}

/// One display row. `text` colours the label cell and is the fallback for
/// value cells when `color` is unset.
#[derive(Clone, Copy)]
pub struct RowRule {
    pub label:      &'static str,
    pub field:      MarketField,
    pub value:      Option<ValueFn>,
    pub transform:  Option<TransformFn>,
    pub color:      Option<RowColor>,
    pub text:       ColorToken,
    pub background: ColorToken,
}

impl RowRule {
    const fn plain(label: &'static str, field: MarketField, background: ColorToken) -> Self {
        Self {
            label,
            field,
            value:      None,
            transform:  None,
            color:      None,
            text:       ColorToken::TextPrimary,
            background,
        }
    }

    /// Cell text for one record.
    pub fn cell_value(&self, record: &MarketRecord) -> String {
        if let Some(value) = self.value {
            return value(record);
        }
        let raw = record.field(self.field);
        match self.transform {
            Some(transform) => transform(raw),
            None => raw.to_string(),
        }
    }

    /// Cell colour for one record.
    pub fn cell_color(&self, record: &MarketRecord) -> ColorToken {
        match self.color {
            Some(RowColor::PerRecord(color)) => color(record),
            Some(RowColor::Fixed(token)) => token,
            None => self.text,
        }
    }
}

// ─── Catalog ──────────────────────────────────────────────────────────────────

pub static ROW_RULES: [RowRule; 11] = [
    RowRule {
        label:      "Last",
        field:      MarketField::LastPrice,
        value:      None,
        transform:  Some(strip_flag),
        color:      Some(RowColor::Fixed(ColorToken::TextHighlight)),
        text:       ColorToken::TextHighlight,
        background: ColorToken::BackgroundHighlight,
    },
    RowRule::plain("Adjustment", MarketField::Adjustment, ColorToken::BackgroundAlt),
    RowRule::plain("High", MarketField::High, ColorToken::BackgroundPrimary),
    RowRule::plain("Low", MarketField::Low, ColorToken::BackgroundAlt),
    RowRule::plain("Open", MarketField::Open, ColorToken::BackgroundPrimary),
    RowRule {
        label:      "Previous Close",
        field:      MarketField::Close,
        value:      None,
        transform:  None,
        color:      None,
        text:       ColorToken::TextSecondary,
        background: ColorToken::BackgroundSoft,
    },
    RowRule::plain("Open Interest", MarketField::Volume, ColorToken::BackgroundAlt),
    RowRule::plain("Volume Traded", MarketField::ContractsTraded, ColorToken::BackgroundPrimary),
    RowRule {
        label:      "Day Change",
        field:      MarketField::Change,
        value:      None,
        transform:  None,
        color:      Some(RowColor::PerRecord(day_color)),
        text:       ColorToken::TextPrimary,
        background: ColorToken::BackgroundAlt,
    },
    RowRule {
        label:      "Month Change %",
        field:      MarketField::MonthChange,
        value:      Some(month_percent),
        transform:  None,
        color:      Some(RowColor::PerRecord(month_color)),
        text:       ColorToken::TextPrimary,
        background: ColorToken::BackgroundPrimary,
    },
    RowRule {
        label:      "Year Change %",
        field:      MarketField::YearChange,
        value:      Some(year_percent),
        transform:  None,
        color:      Some(RowColor::PerRecord(year_color)),
        text:       ColorToken::TextPrimary,
        background: ColorToken::BackgroundAlt,
    },
];

fn strip_flag(raw: &str) -> String {
    strip_settlement_flag(raw).to_string()
}

fn month_percent(record: &MarketRecord) -> String {
    signed_percent(&record.month_change)
}

fn year_percent(record: &MarketRecord) -> String {
    signed_percent(&record.year_change)
}

fn sign_color(raw: &str) -> ColorToken {
    if is_non_negative(raw) {
        ColorToken::Positive
    } else {
        ColorToken::Negative
    }
}

fn day_color(record: &MarketRecord) -> ColorToken {
    sign_color(&record.change)
}

fn month_color(record: &MarketRecord) -> ColorToken {
    sign_color(&record.month_change)
}

fn year_color(record: &MarketRecord) -> ColorToken {
    sign_color(&record.year_change)
}
