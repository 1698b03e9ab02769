//! # render
//!
//! Seam to the external rasterizer that turns a [`TableModel`] into image
//! bytes. The service only builds the tree; pixels are someone else's job.

use async_trait::async_trait;
use serde::Serialize;

use crate::layout::TableModel;

mod http;

pub use http::HttpRenderer;

/// Canvas settings sent along with every tree: fixed width, height grows
/// with the content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasOptions {
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub emoji: &'static str,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self { width: 2048, height: None, emoji: "twemoji" }
    }
}

/// RenderFailure: the rasterizer could not produce an image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Renderer unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Renderer rejected the layout: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait TableRenderer: Send + Sync {
    async fn render(&self, model: &TableModel, options: &CanvasOptions) -> Result<Vec<u8>, RenderError>;
}
