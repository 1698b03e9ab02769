//! # layout::builder
//!
//! **TableLayoutBuilder**: records + title + FX quotes → [`TableModel`].
//!
//! ```text
//! page
//!  ├─ FX panel          "FX - B3" · last update · [$ USD/BRL] [€ EUR/BRL]
//!  └─ table card
//!      ├─ title bar     "<TITLE> - CBOT (USD / bushel)" · logo
//!      ├─ header row    "Data: DD/MM/YYYY" · one maturity per column
//!      ├─ 11 body rows  one per RowRule
//!      └─ footer        "Source: <feed> | Last update: ... (GMT-3)"
//! ```
//!
//! Pure and synchronous. The clock is a parameter of [`TableLayoutBuilder::build_at`].

use chrono::{DateTime, Utc};

use crate::engine::ordering::dedupe;
use crate::layout::format::{
    brasilia_date, brasilia_datetime, format_fx_price, is_non_negative, NOT_AVAILABLE,
};
use crate::layout::model::{FrameStyles, TableModel};
use crate::layout::node::{
    Align, Border, FlexDirection, FontWeight, Justify, LayoutNode, Length, Style, TextAlign,
};
use crate::layout::rows::{RowRule, ROW_RULES};
use crate::layout::style::{ColorToken, TableStyle};
use crate::models::{CurrencyRecord, MarketRecord};

pub const DEFAULT_FEED_NAME: &str = "Broadcast";

/// Static labels of one FX box.
#[derive(Debug, Clone, Copy)]
struct CurrencyBadge {
    glyph: &'static str,
    pair:  &'static str,
    name:  &'static str,
}

const DOLLAR_BADGE: CurrencyBadge = CurrencyBadge { glyph: "$", pair: "USD/BRL", name: "US Dollar" };
const EURO_BADGE: CurrencyBadge = CurrencyBadge { glyph: "€", pair: "EUR/BRL", name: "Euro" };

#[derive(Debug, Clone)]
pub struct TableLayoutBuilder {
    style:     TableStyle,
    feed_name: String,
}

impl TableLayoutBuilder {
    pub fn new(style: TableStyle) -> Self {
        Self { style, feed_name: DEFAULT_FEED_NAME.to_string() }
    }

    pub fn with_feed_name(mut self, feed_name: impl Into<String>) -> Self {
        self.feed_name = feed_name.into();
        self
    }

    /// Build against the current instant.
    pub fn build(
        &self,
        records: &[MarketRecord],
        title: &str,
        dollar: Option<&CurrencyRecord>,
        euro: Option<&CurrencyRecord>,
    ) -> TableModel {
        self.build_at(records, title, dollar, euro, Utc::now())
    }

    pub fn build_at(
        &self,
        records: &[MarketRecord],
        title: &str,
        dollar: Option<&CurrencyRecord>,
        euro: Option<&CurrencyRecord>,
        now: DateTime<Utc>,
    ) -> TableModel {
        let columns = dedupe(records);
        let last = ROW_RULES.len() - 1;

        TableModel {
            title:          title.to_string(),
            columns:        columns.len(),
            currency_panel: self.currency_panel(dollar, euro, now),
            title_bar:      self.title_bar(title),
            header:         self.header_row(&columns, now),
            rows:           ROW_RULES
                .iter()
                .enumerate()
                .map(|(i, rule)| self.body_row(rule, &columns, i == last))
                .collect(),
            footer:         self.footer(now),
            frame:          self.frame_styles(),
        }
    }

    // ─── FX Panel ─────────────────────────────────────────────────────────────

    fn currency_panel(
        &self,
        dollar: Option<&CurrencyRecord>,
        euro: Option<&CurrencyRecord>,
        now: DateTime<Utc>,
    ) -> LayoutNode {
        let s = &self.style;
        let p = &s.palette;

        let header = LayoutNode::container(
            Style::new()
                .flex(FlexDirection::Row)
                .justify(Justify::SpaceBetween)
                .align(Align::Center)
                .margin_bottom(16)
                .padding_bottom(16)
                .border_bottom(Border::hairline(p.hex(ColorToken::Border))),
        )
        .child(LayoutNode::text(
            "FX - B3",
            Style::new().color(p.hex(ColorToken::Brand)).font(s.title_font_size, FontWeight::Bold),
        ))
        .child(LayoutNode::text(
            format!("Last update: {}", brasilia_datetime(now)),
            Style::new().color(p.hex(ColorToken::TextMuted)).font_size(s.body_font_size),
        ));

        let boxes = LayoutNode::container(Style::new().flex(FlexDirection::Row).gap(s.section_gap))
            .child(self.currency_box(DOLLAR_BADGE, dollar))
            .child(self.currency_box(EURO_BADGE, euro));

        LayoutNode::container(
            Style::new()
                .flex(FlexDirection::Column)
                .background(p.hex(ColorToken::BackgroundPrimary))
                .radius(Length::Px(s.card_radius))
                .padding(24, 24)
                .margin_bottom(s.section_gap)
                .shadow(s.card_shadow.clone()),
        )
        .child(header)
        .child(boxes)
        .build()
    }

    /// One FX box. An absent record shows `N/A` and an empty, uncoloured
    /// percent line.
    fn currency_box(&self, badge: CurrencyBadge, record: Option<&CurrencyRecord>) -> LayoutNode {
        let p = &self.style.palette;

        let (price, percent, percent_color) = match record {
            Some(rec) => {
                let tone = if is_non_negative(&rec.change) {
                    ColorToken::Positive
                } else {
                    ColorToken::Negative
                };
                (format_fx_price(&rec.last_price), rec.percent_change.clone(), Some(p.hex(tone)))
            }
            None => (NOT_AVAILABLE.to_string(), String::new(), None),
        };

        let mut percent_style = Style::new().font(16, FontWeight::Medium);
        percent_style.color = percent_color;

        let icon = LayoutNode::text(
            badge.glyph,
            Style::new()
                .flex(FlexDirection::Row)
                .width(Length::Px(40))
                .height(Length::Px(40))
                .background(p.hex(ColorToken::Brand))
                .radius(Length::Percent(50))
                .align(Align::Center)
                .justify(Justify::Center)
                .color(p.hex(ColorToken::TextInverse))
                .font(18, FontWeight::Bold)
                .margin_right(12),
        );

        let names = LayoutNode::container(Style::new().flex(FlexDirection::Column))
            .child(LayoutNode::text(
                badge.pair,
                Style::new().color(p.hex(ColorToken::Brand)).font(18, FontWeight::Semibold),
            ))
            .child(LayoutNode::text(
                badge.name,
                Style::new().color(p.hex(ColorToken::TextMuted)).font_size(14),
            ));

        let identity = LayoutNode::container(Style::new().flex(FlexDirection::Row).align(Align::Center))
            .child(icon)
            .child(names);

        let quote = LayoutNode::container(
            Style::new().flex(FlexDirection::Column).text_align(TextAlign::Right),
        )
        .child(LayoutNode::text(
            price,
            Style::new().color(p.hex(ColorToken::Brand)).font(24, FontWeight::Bold),
        ))
        .child(LayoutNode::text(percent, percent_style));

        LayoutNode::container(
            Style::new()
                .flex(FlexDirection::Row)
                .align(Align::Center)
                .justify(Justify::SpaceBetween)
                .padding(16, 20)
                .background(p.hex(ColorToken::BackgroundAlt))
                .radius(Length::Px(self.style.card_radius))
                .grow(1),
        )
        .child(identity)
        .child(quote)
        .build()
    }

    // ─── Table ────────────────────────────────────────────────────────────────

    fn title_bar(&self, title: &str) -> LayoutNode {
        let s = &self.style;
        let p = &s.palette;

        LayoutNode::container(
            Style::new()
                .flex(FlexDirection::Row)
                .justify(Justify::SpaceBetween)
                .align(Align::Center)
                .padding(20, 24)
                .background(p.hex(ColorToken::BackgroundPrimary))
                .border_bottom(Border::hairline(p.hex(ColorToken::Border))),
        )
        .child(LayoutNode::text(
            format!("{title} - CBOT (USD / bushel)"),
            Style::new().color(p.hex(ColorToken::Brand)).font(s.title_font_size, FontWeight::Bold),
        ))
        .child(LayoutNode::image(
            s.logo.src.clone(),
            s.logo.width,
            s.logo.height,
            Style::new().contain(),
        ))
        .build()
    }

    /// Date cell plus one maturity label per column.
    fn header_row(&self, columns: &[MarketRecord], now: DateTime<Utc>) -> LayoutNode {
        let s = &self.style;
        let (py, px) = s.cell_padding;
        let inverse = s.palette.hex(ColorToken::TextInverse);

        let date_cell = LayoutNode::text(
            format!("Data: {}", brasilia_date(now)),
            Style::new()
                .fixed(s.label_width)
                .padding(py, px)
                .color(inverse.clone())
                .text_align(TextAlign::Left)
                .font(s.body_font_size, FontWeight::Semibold),
        );

        let maturity_cells = columns.iter().map(|rec| {
            LayoutNode::text(
                rec.expiration_date.clone(),
                Style::new()
                    .grow(1)
                    .padding(py, px)
                    .color(inverse.clone())
                    .text_align(TextAlign::Center)
                    .font(s.body_font_size, FontWeight::Semibold),
            )
        });

        LayoutNode::container(
            Style::new()
                .flex(FlexDirection::Row)
                .background(s.palette.hex(ColorToken::Brand))
                .width(Length::Percent(100)),
        )
        .child(date_cell)
        .children(maturity_cells)
        .build()
    }

    fn body_row(&self, rule: &RowRule, columns: &[MarketRecord], is_last: bool) -> LayoutNode {
        let s = &self.style;
        let p = &s.palette;
        let (py, px) = s.cell_padding;

        let label = LayoutNode::text(
            rule.label,
            Style::new()
                .fixed(s.label_width)
                .padding(py, px)
                .color(p.hex(rule.text))
                .font(s.body_font_size, FontWeight::Medium),
        );

        let cells = columns.iter().map(|rec| {
            LayoutNode::text(
                rule.cell_value(rec),
                Style::new()
                    .grow(1)
                    .padding(py, px)
                    .text_align(TextAlign::Center)
                    .font(s.body_font_size, FontWeight::Medium)
                    .color(p.hex(rule.cell_color(rec)))
                    .monospace(),
            )
        });

        let border = if is_last {
            Border::None
        } else {
            Border::hairline(p.hex(ColorToken::Border))
        };

        LayoutNode::container(
            Style::new()
                .flex(FlexDirection::Row)
                .width(Length::Percent(100))
                .background(p.hex(rule.background))
                .border_bottom(border),
        )
        .child(label)
        .children(cells)
        .build()
    }

    fn footer(&self, now: DateTime<Utc>) -> LayoutNode {
        let s = &self.style;
        let (py, px) = s.cell_padding;

        LayoutNode::text(
            format!(
                "Source: {} | Last update: {} (GMT-3)",
                self.feed_name,
                brasilia_datetime(now)
            ),
            Style::new()
                .padding(py, px)
                .font_size(s.caption_font_size)
                .color(s.palette.hex(ColorToken::TextMuted))
                .border_top(Border::hairline(s.palette.hex(ColorToken::Border)))
                .background(s.palette.hex(ColorToken::BackgroundAlt)),
        )
    }

    fn frame_styles(&self) -> FrameStyles {
        let s = &self.style;
        let p = &s.palette;

        FrameStyles {
            page: Style::new()
                .flex(FlexDirection::Column)
                .width(Length::Percent(100))
                .background(p.hex(ColorToken::BackgroundPage))
                .padding(s.page_padding, s.page_padding),
            card: Style::new()
                .flex(FlexDirection::Column)
                .background(p.hex(ColorToken::BackgroundPrimary))
                .radius(Length::Px(s.card_radius))
                .overflow_hidden()
                .shadow(s.card_shadow.clone()),
            grid: Style::new().flex(FlexDirection::Column).width(Length::Percent(100)),
        }
    }
}

impl Default for TableLayoutBuilder {
    fn default() -> Self {
        Self::new(TableStyle::default())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
