// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, top-level handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::error::AnalysisError;
use crate::models::service::{VersionResponse, SERVICE_NAME};
use crate::routes::{analysis_router, AnalysisApiDoc, AnalysisState};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use std::any::Any as PanicPayload;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `SITE_ANALYSIS_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("SITE_ANALYSIS_VERSION");

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub analysis: AnalysisState,
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
    })
}

/// Turn a handler panic into the generic 500 body.
fn panic_response(panic: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let cause = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    AnalysisError::Internal(format!("handler panicked: {}", cause)).into_response()
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/version", get(version_handler))
        .merge(analysis_router().with_state(state.analysis))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", AnalysisApiDoc::openapi()),
        )
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
