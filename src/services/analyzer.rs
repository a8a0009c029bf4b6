// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::Result;
use crate::models::analysis::AnalyzeResponse;
use crate::services::extractor::extract_page_attributes;
use crate::services::fetcher::PageFetcher;
use crate::services::llm::CompletionClient;
use crate::services::prompt::{build_analysis_prompt, SYSTEM_INSTRUCTION};
use crate::services::reconciler::reconcile;
use std::sync::Arc;
use uuid::Uuid;

/// Runs one analysis: fetch, extract, prompt, reconcile.
pub struct WebsiteAnalyzer {
    fetcher: PageFetcher,
    llm: Arc<dyn CompletionClient>,
}

impl WebsiteAnalyzer {
    pub fn new(fetcher: PageFetcher, llm: Arc<dyn CompletionClient>) -> Self {
        Self { fetcher, llm }
    }

    /// Analyze a page. The model is called exactly once; an unusable answer
    /// is replaced by heuristic scoring rather than surfaced as an error.
    pub async fn analyze(&self, url: &str) -> Result<AnalyzeResponse> {
        let fetched = self.fetcher.fetch(url).await?;
        let page = extract_page_attributes(url, &fetched)?;

        tracing::debug!(
            url = %url,
            title = %page.title,
            links = page.links_count,
            images = page.images_count,
            schema_blocks = page.schema_data.len(),
            "Extracted page attributes"
        );

        let prompt = build_analysis_prompt(&page);
        tracing::debug!(model = %self.llm.model(), prompt_bytes = prompt.len(), "Calling model");
        let raw = self.llm.complete(SYSTEM_INSTRUCTION, &prompt).await?;

        let result = reconcile(&raw, &page);

        Ok(AnalyzeResponse {
            url: url.to_string(),
            analysis_id: Uuid::new_v4().to_string(),
            title: page.title,
            description: page.description,
            result,
        })
    }
}
