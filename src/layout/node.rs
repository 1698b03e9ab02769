//! # layout::node
//!
//! [`LayoutNode`]: the renderer-agnostic visual tree.
//!
//! The tree serializes to the element JSON the rasterizer understands:
//!
//! ```json
//! { "type": "container", "style": { "display": "flex" }, "children": [
//!     { "type": "text", "style": { "fontSize": 16 }, "content": "Last" }
//! ] }
//! ```

use serde::{Serialize, Serializer};

// ─── Nodes ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    Container {
        style:    Style,
        children: Vec<LayoutNode>,
    },
    Text {
        style:   Style,
        content: String,
    },
    Image {
        style:  Style,
        src:    String,
        width:  u32,
        height: u32,
    },
}

impl LayoutNode {
    pub fn container(style: Style) -> ContainerBuilder {
        ContainerBuilder { style, children: Vec::new() }
    }

    pub fn text(content: impl Into<String>, style: Style) -> Self {
        LayoutNode::Text { style, content: content.into() }
    }

    pub fn image(src: impl Into<String>, width: u32, height: u32, style: Style) -> Self {
        LayoutNode::Image { style, src: src.into(), width, height }
    }

    pub fn style(&self) -> &Style {
        match self {
            LayoutNode::Container { style, .. }
            | LayoutNode::Text { style, .. }
            | LayoutNode::Image { style, .. } => style,
        }
    }

    /// Direct children. Leaves have none.
    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Text of a `Text` node.
    pub fn content(&self) -> Option<&str> {
        match self {
            LayoutNode::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Every text in the subtree, depth-first in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            LayoutNode::Text { content, .. } => out.push(content),
            LayoutNode::Container { children, .. } => {
                children.iter().for_each(|c| c.collect_texts(out));
            }
            LayoutNode::Image { .. } => {}
        }
    }
}

/// Collects children before sealing a [`LayoutNode::Container`].
#[derive(Debug, Clone)]
pub struct ContainerBuilder {
    style:    Style,
    children: Vec<LayoutNode>,
}

impl ContainerBuilder {
    pub fn child(mut self, node: impl Into<LayoutNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = LayoutNode>,
    {
        self.children.extend(nodes);
        self
    }

    pub fn build(self) -> LayoutNode {
        LayoutNode::Container { style: self.style, children: self.children }
    }
}

impl From<ContainerBuilder> for LayoutNode {
    fn from(builder: ContainerBuilder) -> Self {
        builder.build()
    }
}

// ─── Style Record ─────────────────────────────────────────────────────────────

/// Explicit style record carried by every node. Unset properties are left
/// out of the JSON so the rasterizer applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<Flex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Justify>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_top: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<Overflow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<ObjectFit>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// `display: flex` with the given direction.
    pub fn flex(mut self, direction: FlexDirection) -> Self {
        self.display = Some(Display::Flex);
        self.flex_direction = Some(direction);
        self
    }

    pub fn grow(mut self, weight: u32) -> Self {
        self.flex = Some(Flex::Grow(weight));
        self
    }

    pub fn fixed(mut self, px: u32) -> Self {
        self.flex = Some(Flex::Fixed(px));
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify_content = Some(justify);
        self
    }

    pub fn gap(mut self, px: u32) -> Self {
        self.gap = Some(px);
        self
    }

    pub fn width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: Length) -> Self {
        self.height = Some(height);
        self
    }

    pub fn padding(mut self, vertical: u32, horizontal: u32) -> Self {
        self.padding = Some(Spacing { vertical, horizontal });
        self
    }

    pub fn margin_bottom(mut self, px: u32) -> Self {
        self.margin_bottom = Some(px);
        self
    }

    pub fn margin_right(mut self, px: u32) -> Self {
        self.margin_right = Some(px);
        self
    }

    pub fn padding_bottom(mut self, px: u32) -> Self {
        self.padding_bottom = Some(px);
        self
    }

    pub fn background(mut self, hex: impl Into<String>) -> Self {
        self.background_color = Some(hex.into());
        self
    }

    pub fn color(mut self, hex: impl Into<String>) -> Self {
        self.color = Some(hex.into());
        self
    }

    pub fn font(mut self, size: u32, weight: FontWeight) -> Self {
        self.font_size = Some(size);
        self.font_weight = Some(weight);
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn monospace(mut self) -> Self {
        self.font_family = Some(FontFamily::Monospace);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn border_top(mut self, border: Border) -> Self {
        self.border_top = Some(border);
        self
    }

    pub fn border_bottom(mut self, border: Border) -> Self {
        self.border_bottom = Some(border);
        self
    }

    pub fn radius(mut self, radius: Length) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn shadow(mut self, shadow: impl Into<String>) -> Self {
        self.box_shadow = Some(shadow.into());
        self
    }

    pub fn overflow_hidden(mut self) -> Self {
        self.overflow = Some(Overflow::Hidden);
        self
    }

    pub fn contain(mut self) -> Self {
        self.object_fit = Some(ObjectFit::Contain);
        self
    }
}

// ─── Style Values ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Flex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    Center,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    #[serde(rename = "500")]
    Medium,
    #[serde(rename = "600")]
    Semibold,
    #[serde(rename = "700")]
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Monospace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    Contain,
}

/// `flex: 1` or `flex: "0 0 180px"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flex {
    Grow(u32),
    Fixed(u32),
}

impl Serialize for Flex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Flex::Grow(weight) => serializer.serialize_u32(*weight),
            Flex::Fixed(px) => serializer.serialize_str(&format!("0 0 {px}px")),
        }
    }
}

/// Pixels serialize as a number, percentages as `"N%"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Px(u32),
    Percent(u32),
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Length::Px(px) => serializer.serialize_u32(*px),
            Length::Percent(pct) => serializer.serialize_str(&format!("{pct}%")),
        }
    }
}

/// Padding shorthand. Equal sides collapse to a single number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub vertical:   u32,
    pub horizontal: u32,
}

impl Serialize for Spacing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.vertical == self.horizontal {
            serializer.serialize_u32(self.vertical)
        } else {
            serializer.serialize_str(&format!("{}px {}px", self.vertical, self.horizontal))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Border {
    None,
    Solid { width: u32, color: String },
}

impl Border {
    pub fn hairline(color: impl Into<String>) -> Self {
        Border::Solid { width: 1, color: color.into() }
    }
}

impl Serialize for Border {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Border::None => serializer.serialize_str("none"),
            Border::Solid { width, color } => {
                serializer.serialize_str(&format!("{width}px solid {color}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tree_serializes_with_type_tag() {
        let node = LayoutNode::container(Style::new().flex(FlexDirection::Row).padding(12, 16))
            .child(LayoutNode::text("Last", Style::new().fixed(180).font(16, FontWeight::Medium)))
            .child(LayoutNode::image("logo.png", 160, 54, Style::new().contain()))
            .build();

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "container",
                "style": { "display": "flex", "flexDirection": "row", "padding": "12px 16px" },
                "children": [
                    { "type": "text",
                      "style": { "flex": "0 0 180px", "fontSize": 16, "fontWeight": "500" },
                      "content": "Last" },
                    { "type": "image", "style": { "objectFit": "contain" },
                      "src": "logo.png", "width": 160, "height": 54 }
                ]
            })
        );
    }

    #[test]
    fn test_style_values_serialize_like_css() {
        let style = Style::new()
            .grow(1)
            .width(Length::Percent(100))
            .radius(Length::Percent(50))
            .padding(24, 24)
            .justify(Justify::SpaceBetween)
            .border_bottom(Border::None)
            .border_top(Border::hairline("#e5e7eb"));

        let value = serde_json::to_value(&style).unwrap();
        assert_eq!(value["flex"], 1);
        assert_eq!(value["width"], "100%");
        assert_eq!(value["borderRadius"], "50%");
        assert_eq!(value["padding"], 24);
        assert_eq!(value["justifyContent"], "space-between");
        assert_eq!(value["borderBottom"], "none");
        assert_eq!(value["borderTop"], "1px solid #e5e7eb");
    }

    #[test]
    fn test_texts_walks_in_document_order() {
        let node = LayoutNode::container(Style::new())
            .child(LayoutNode::text("a", Style::new()))
            .child(
                LayoutNode::container(Style::new())
                    .child(LayoutNode::text("b", Style::new()))
                    .child(LayoutNode::image("x", 1, 1, Style::new())),
            )
            .child(LayoutNode::text("c", Style::new()))
            .build();

        assert_eq!(node.texts(), vec!["a", "b", "c"]);
        assert_eq!(node.children().len(), 3);
        assert_eq!(node.children()[0].content(), Some("a"));
    }
}
