// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Analysis result
// ============================================================================

/// One actionable improvement suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Suggestion {
    /// SEO, Performance, UX, Content or Technical
    pub category: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub impact: String,
    pub effort: String,
}

/// A general-purpose tool worth adopting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ToolRecommendation {
    pub category: String,
    pub tool_name: String,
    pub description: String,
    pub use_case: String,
}

/// Critique of a single meta field (title or description).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MetaFieldAnalysis {
    /// Length in characters
    #[serde(deserialize_with = "lenient_score")]
    pub length: u32,
    #[serde(deserialize_with = "lenient_score")]
    pub seo_score: u32,
    pub issues: Vec<String>,
    pub suggestions: String,
}

/// Meta title/description analysis and rewrite proposals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MetaAnalysis {
    pub current_meta_title: String,
    pub current_meta_description: String,
    pub meta_title_analysis: MetaFieldAnalysis,
    pub meta_description_analysis: MetaFieldAnalysis,
    pub seo_strategy_insights: Vec<String>,
    pub recommended_meta_title: String,
    pub recommended_meta_description: String,
}

/// An AI capability the site could integrate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AiToolIntegration {
    pub category: String,
    pub tool_name: String,
    pub description: String,
    pub integration_complexity: String,
    pub expected_impact: String,
    pub use_case: String,
    pub implementation_steps: Vec<String>,
}

/// Score and main issues for one analysis dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryScore {
    #[serde(deserialize_with = "lenient_score")]
    pub score: u32,
    #[serde(default)]
    pub key_issues: Vec<String>,
}

/// The five fixed analysis dimensions, serialized in this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Categories {
    pub seo: CategoryScore,
    pub performance: CategoryScore,
    pub ux: CategoryScore,
    pub content: CategoryScore,
    pub technical: CategoryScore,
}

/// Structured analysis, produced either by the model or by the fallback scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    /// 0-100
    #[serde(deserialize_with = "lenient_score")]
    pub overall_score: u32,
    pub content_summary: String,
    pub suggestions: Vec<Suggestion>,
    pub tools_recommended: Vec<ToolRecommendation>,
    #[serde(default)]
    pub meta_analysis: MetaAnalysis,
    #[serde(default)]
    pub ai_tools_integration: Vec<AiToolIntegration>,
    pub categories: Categories,
}

/// Accept any JSON number for a score: models sometimes answer `75.0`.
/// Negative values saturate at 0, fractions round to nearest.
fn lenient_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_u64() {
        return Ok(u32::try_from(n).unwrap_or(u32::MAX));
    }
    let value = number.as_f64().unwrap_or(0.0);
    Ok(value.round().max(0.0) as u32)
}

// ============================================================================
// HTTP request / response
// ============================================================================

/// Request to analyze a single page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Absolute http(s) URL of the page
    pub url: String,
}

/// Analysis result plus request echo and page identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    pub url: String,
    /// Unique id of this analysis run
    pub analysis_id: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
