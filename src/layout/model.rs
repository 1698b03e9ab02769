//! # layout::model
//!
//! [`TableModel`]: the finished layout of one commodity table, kept in named
//! sections so callers can inspect it, and assembled into a single tree for
//! the rasterizer by [`TableModel::tree`].

use crate::layout::node::{LayoutNode, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub title: String,
    /// Number of (deduplicated) contract columns.
    pub columns: usize,
    pub currency_panel: LayoutNode,
    pub title_bar: LayoutNode,
    pub header: LayoutNode,
    pub rows: Vec<LayoutNode>,
    pub footer: LayoutNode,
    pub(crate) frame: FrameStyles,
}

/// Styles of the wrapping containers that only exist in the assembled tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FrameStyles {
    pub page: Style,
    pub card: Style,
    pub grid: Style,
}

impl TableModel {
    /// The full tree: page → [FX panel, card → [title, grid → [header, rows], footer]].
    pub fn tree(&self) -> LayoutNode {
        let grid = LayoutNode::container(self.frame.grid.clone())
            .child(self.header.clone())
            .children(self.rows.iter().cloned());

        let card = LayoutNode::container(self.frame.card.clone())
            .child(self.title_bar.clone())
            .child(grid)
            .child(self.footer.clone());

        LayoutNode::container(self.frame.page.clone())
            .child(self.currency_panel.clone())
            .child(card)
            .build()
    }
}
