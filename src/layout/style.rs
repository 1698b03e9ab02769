//! # layout::style
//!
//! The one place where colours, spacing and typography live. The builder only
//! speaks in [`ColorToken`]s; a [`Palette`] turns them into hex strings.

use serde::Serialize;

// ─── Color Tokens ─────────────────────────────────────────────────────────────

/// Named colour roles used by the table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    BackgroundPage,
    BackgroundPrimary,
    BackgroundAlt,
    BackgroundHighlight,
    BackgroundSoft,
    TextPrimary,
    TextHighlight,
    TextSecondary,
    TextMuted,
    TextInverse,
    Brand,
    Border,
    Positive,
    Negative,
}

/// Hex values behind every [`ColorToken`].
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background_page:      String,
    pub background_primary:   String,
    pub background_alt:       String,
    pub background_highlight: String,
    pub background_soft:      String,
    pub text_primary:         String,
    pub text_highlight:       String,
    pub text_secondary:       String,
    pub text_muted:           String,
    pub text_inverse:         String,
    pub brand:                String,
    pub border:               String,
    pub positive_color:       String,
    pub negative_color:       String,
}

impl Palette {
    pub fn resolve(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::BackgroundPage      => &self.background_page,
            ColorToken::BackgroundPrimary   => &self.background_primary,
            ColorToken::BackgroundAlt       => &self.background_alt,
            ColorToken::BackgroundHighlight => &self.background_highlight,
            ColorToken::BackgroundSoft      => &self.background_soft,
            ColorToken::TextPrimary         => &self.text_primary,
            ColorToken::TextHighlight       => &self.text_highlight,
            ColorToken::TextSecondary       => &self.text_secondary,
            ColorToken::TextMuted           => &self.text_muted,
            ColorToken::TextInverse         => &self.text_inverse,
            ColorToken::Brand               => &self.brand,
            ColorToken::Border              => &self.border,
            ColorToken::Positive            => &self.positive_color,
            ColorToken::Negative            => &self.negative_color,
        }
    }

    /// Owned hex string, ready to drop into a [`super::node::Style`].
    pub fn hex(&self, token: ColorToken) -> String {
        self.resolve(token).to_string()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background_page:      "#f8fafc".into(),
            background_primary:   "#ffffff".into(),
            background_alt:       "#f8fafc".into(),
            background_highlight: "#ECFDF5".into(),
            background_soft:      "#F0FDF4".into(),
            text_primary:         "#1B4332".into(),
            text_highlight:       "#065F46".into(),
            text_secondary:       "#166534".into(),
            text_muted:           "#6b7280".into(),
            text_inverse:         "#ffffff".into(),
            brand:                "#1B4332".into(),
            border:               "#e5e7eb".into(),
            positive_color:       "#16a34a".into(),
            negative_color:       "#dc2626".into(),
        }
    }
}

// ─── Table Style ──────────────────────────────────────────────────────────────

/// Logo shown in the title bar of every table.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    pub src:    String,
    pub width:  u32,
    pub height: u32,
}

impl Default for LogoImage {
    fn default() -> Self {
        Self {
            src: "https://gwakkxqrbqiezvrsnzhb.supabase.co/storage/v1/object/public/images_innovagro//f2d1ae35-b222-47c4-af8c-c70811e249f9.png".into(),
            width:  160,
            height: 54,
        }
    }
}

/// Everything visual the [`super::builder::TableLayoutBuilder`] needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub palette: Palette,
    pub logo:    LogoImage,

    /// Outer padding of the page, in px.
    pub page_padding: u32,
    /// Gap between the FX panel and the table card.
    pub section_gap:  u32,
    pub card_radius:  u32,
    pub card_shadow:  String,

    /// Fixed width of the leftmost (label) column.
    pub label_width:  u32,
    pub cell_padding: (u32, u32),

    pub title_font_size:  u32,
    pub body_font_size:   u32,
    pub caption_font_size: u32,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            palette:           Palette::default(),
            logo:              LogoImage::default(),
            page_padding:      40,
            section_gap:       24,
            card_radius:       8,
            card_shadow:       "0 1px 3px rgba(0,0,0,0.1)".into(),
            label_width:       180,
            cell_padding:      (12, 16),
            title_font_size:   24,
            body_font_size:    16,
            caption_font_size: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_signal_colors() {
        let p = Palette::default();
        assert_eq!(p.resolve(ColorToken::Positive), "#16a34a");
        assert_eq!(p.resolve(ColorToken::Negative), "#dc2626");
        assert_eq!(p.resolve(ColorToken::Brand), "#1B4332");
    }
}
