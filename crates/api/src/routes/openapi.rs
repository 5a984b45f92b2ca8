//! Publishes the static API schema document.
//!
//! The document describes the same payload rules the request extractors
//! enforce; `tests/openapi.rs` keeps the two in step.

use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::state::AppState;

/// The OpenAPI 3 document for this service.
pub const OPENAPI_DOCUMENT: &str = include_str!("../../openapi.json");

/// GET /openapi.json
async fn openapi_document() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], OPENAPI_DOCUMENT)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_document))
}
