// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::analysis::ErrorResponse;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failures that end an analysis request.
///
/// An unparseable model answer is not an error: the reconciler falls back
/// to the heuristic scorer instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Request body missing, not JSON, or not an `AnalyzeRequest`
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("URL must start with http:// or https://")]
    UnsupportedScheme(String),

    #[error("Unable to access website: {0}")]
    UnreachableHost(String),

    #[error("Error extracting content: {0}")]
    Extraction(String),

    #[error("Error analyzing with Gemini: {0}")]
    ModelCallFailed(String),

    #[error("Analysis failed: {0}")]
    Internal(String),
}

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::InvalidBody { status, .. } => *status,
            AnalysisError::InvalidUrl
            | AnalysisError::UnsupportedScheme(_)
            | AnalysisError::UnreachableHost(_) => StatusCode::BAD_REQUEST,
            AnalysisError::Extraction(_)
            | AnalysisError::ModelCallFailed(_)
            | AnalysisError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::UnreachableHost(err.to_string())
    }
}

impl From<JsonRejection> for AnalysisError {
    fn from(rejection: JsonRejection) -> Self {
        AnalysisError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match &self {
            // Internal causes stay in the server log
            AnalysisError::Internal(cause) => {
                tracing::error!(error = %cause, "Unexpected analysis failure");
                "Analysis failed: unexpected server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        assert_eq!(AnalysisError::InvalidUrl.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AnalysisError::UnsupportedScheme("ftp".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AnalysisError::UnreachableHost("dns".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_server_errors_map_to_500() {
        assert_eq!(
            AnalysisError::ModelCallFailed("quota".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AnalysisError::Extraction("selector".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AnalysisError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(AnalysisError::InvalidUrl.to_string(), "Invalid URL format");
        assert_eq!(
            AnalysisError::UnsupportedScheme("ftp".into()).to_string(),
            "URL must start with http:// or https://"
        );
        assert_eq!(
            AnalysisError::UnreachableHost("connection refused".into()).to_string(),
            "Unable to access website: connection refused"
        );
    }

    #[tokio::test]
    async fn test_invalid_body_keeps_rejection_status() {
        let err = AnalysisError::InvalidBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `url`".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.detail, "missing field `url`");
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let response = AnalysisError::Internal("secret stack".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(!error.detail.contains("secret stack"));
    }
}
