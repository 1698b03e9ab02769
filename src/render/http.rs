//! [`TableRenderer`] that POSTs the layout tree to a rasterizer service.
//!
//! ```json
//! POST {RENDER_URL}
//! { "tree": { "type": "container", ... }, "options": { "width": 2048, "emoji": "twemoji" } }
//! ```
//!
//! The response body is the raw image.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::layout::{node::LayoutNode, TableModel};
use crate::render::{CanvasOptions, RenderError, TableRenderer};

#[derive(Serialize)]
struct RenderRequest<'a> {
    tree:    LayoutNode,
    options: &'a CanvasOptions,
}

pub struct HttpRenderer {
    client: reqwest::Client,
    url:    String,
}

impl HttpRenderer {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl TableRenderer for HttpRenderer {
    async fn render(&self, model: &TableModel, options: &CanvasOptions) -> Result<Vec<u8>, RenderError> {
        let body = RenderRequest { tree: model.tree(), options };

        let resp = self.client.post(&self.url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(RenderError::Rejected { status, body });
        }

        let bytes = resp.bytes().await?;
        debug!(title = %model.title, bytes = bytes.len(), "Table rendered");
        Ok(bytes.to_vec())
    }
}
