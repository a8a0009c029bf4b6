// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Turns raw model text into an [`AnalysisResult`], falling back to the
//! heuristic scorer whenever the text is not usable.

use crate::models::analysis::AnalysisResult;
use crate::models::page::PageAttributes;
use crate::services::logging::preview;
use crate::services::scorer::score_page;
use thiserror::Error;

/// Top-level keys a model answer must carry to be accepted
pub const REQUIRED_FIELDS: [&str; 5] = [
    "overall_score",
    "content_summary",
    "suggestions",
    "tools_recommended",
    "categories",
];

/// Why a model answer was rejected
#[derive(Debug, Error)]
pub enum ResponseRejected {
    #[error("response is not valid JSON: {0}")]
    NotJson(serde_json::Error),

    #[error("response is not a JSON object")]
    NotObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("response has unexpected shape: {0}")]
    Shape(serde_json::Error),
}

/// Remove surrounding whitespace and Markdown code fences.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

/// Strictly parse a model answer.
pub fn parse_model_response(raw: &str) -> Result<AnalysisResult, ResponseRejected> {
    let value: serde_json::Value =
        serde_json::from_str(strip_code_fences(raw)).map_err(ResponseRejected::NotJson)?;

    let object = value.as_object().ok_or(ResponseRejected::NotObject)?;
    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        return Err(ResponseRejected::MissingField(*missing));
    }

    let mut result: AnalysisResult =
        serde_json::from_value(value).map_err(ResponseRejected::Shape)?;
    result.overall_score = result.overall_score.min(100);
    Ok(result)
}

/// Use the model answer when it is valid, otherwise score the page heuristically.
/// Never fails.
pub fn reconcile(raw: &str, page: &PageAttributes) -> AnalysisResult {
    match parse_model_response(raw) {
        Ok(result) => result,
        Err(reason) => {
            tracing::warn!(
                url = %page.url,
                reason = %reason,
                response = %preview(raw, 500),
                "Model response unusable, falling back to heuristic scoring"
            );
            score_page(page)
        }
    }
}
