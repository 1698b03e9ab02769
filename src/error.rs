//! # error
//!
//! Centralised application error type.
//!
//! Only the outermost orchestration of `/api/v1/market-tables` returns
//! `AppError`. Parse failures never become errors, and per-table failures are
//! absorbed where they happen. `/api/v1/market-data` folds every failure into
//! its own 200 body, so it never sees this type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::render::RenderError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Redis credentials are not configured.
    #[error("Redis configuration is missing")]
    ConfigurationMissing,

    /// The store failed during the top-level join.
    #[error(transparent)]
    Fetch(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error":   true,
            "message": self.to_string(),
            "details": format!("{self:?}"),
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Why one commodity table came back empty.
#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Fetch(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
