// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Website analysis route handlers.

use crate::error::AnalysisError;
use crate::models::analysis::{
    AiToolIntegration, AnalysisResult, AnalyzeRequest, AnalyzeResponse, Categories, CategoryScore,
    ErrorResponse, MetaAnalysis, MetaFieldAnalysis, Suggestion, ToolRecommendation,
};
use crate::models::service::{HealthResponse, RootResponse, SERVICE_NAME};
use crate::services::analyzer::WebsiteAnalyzer;
use crate::services::fetcher::PageFetcher;
use crate::services::llm::CompletionClient;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// State for analysis routes.
#[derive(Clone)]
pub struct AnalysisState {
    pub analyzer: Arc<WebsiteAnalyzer>,
}

impl AnalysisState {
    pub fn new(fetcher: PageFetcher, llm: Arc<dyn CompletionClient>) -> Self {
        Self {
            analyzer: Arc::new(WebsiteAnalyzer::new(fetcher, llm)),
        }
    }
}

/// Create the analysis router.
pub fn analysis_router() -> Router<AnalysisState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/health", get(health_handler))
        .route("/api/analyze", post(analyze_handler))
}

#[derive(OpenApi)]
#[openapi(
    paths(root_handler, health_handler, analyze_handler),
    components(schemas(
        AnalyzeRequest,
        AnalyzeResponse,
        AnalysisResult,
        Suggestion,
        ToolRecommendation,
        MetaAnalysis,
        MetaFieldAnalysis,
        AiToolIntegration,
        Categories,
        CategoryScore,
        ErrorResponse,
        HealthResponse,
        RootResponse,
    )),
    tags((name = "analysis", description = "Website analysis"))
)]
pub struct AnalysisApiDoc;

/// GET / - Service banner.
#[utoipa::path(
    get,
    path = "/",
    tag = "analysis",
    responses((status = 200, description = "Service banner", body = RootResponse))
)]
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Website Analysis Tool API".to_string(),
    })
}

/// GET /api/health - Liveness check.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "analysis",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// POST /api/analyze - Fetch and analyze one page.
#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analysis",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result", body = AnalyzeResponse),
        (status = 400, description = "Invalid or unreachable URL, or malformed body", body = ErrorResponse),
        (status = 422, description = "Body is missing the url field", body = ErrorResponse),
        (status = 500, description = "Extraction or model failure", body = ErrorResponse)
    )
)]
pub async fn analyze_handler(
    State(state): State<AnalysisState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AnalysisError> {
    let Json(payload) = payload?;
    tracing::info!(url = %payload.url, "Analyzing website");

    let response = state.analyzer.analyze(&payload.url).await?;

    tracing::info!(
        url = %response.url,
        analysis_id = %response.analysis_id,
        overall_score = response.result.overall_score,
        "Analysis complete"
    );
    Ok(Json(response))
}
