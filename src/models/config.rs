// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::services::logging::mask_secret;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Outbound page fetch settings
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Gemini completion endpoint settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
    pub timeout: Duration,
}

/// Service configuration loaded from environment variables (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub fetch: FetchConfig,
    pub llm: LlmConfig,
}

impl ServiceConfig {
    /// Load configuration. Only `GEMINI_API_KEY` is mandatory.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key =
            env::var("GEMINI_API_KEY").context("GEMINI_API_KEY environment variable must be set")?;

        let config = Self {
            fetch: FetchConfig {
                timeout: Duration::from_secs(parse_var("FETCH_TIMEOUT_SECS", 30)?),
                user_agent: env::var("FETCH_USER_AGENT")
                    .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            },
            llm: LlmConfig {
                api_key,
                model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: env::var("GEMINI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
                max_output_tokens: parse_var("LLM_MAX_OUTPUT_TOKENS", 4096)?,
                timeout: Duration::from_secs(parse_var("LLM_TIMEOUT_SECS", 120)?),
            },
        };

        config.log_summary();
        Ok(config)
    }

    fn log_summary(&self) {
        tracing::info!(
            gemini_api_key = %mask_secret(&self.llm.api_key),
            model = %self.llm.model,
            base_url = %self.llm.base_url,
            fetch_timeout_secs = self.fetch.timeout.as_secs(),
            "Config loaded"
        );
    }
}

/// Read and parse an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a valid number, got: {raw}")),
        Err(_) => Ok(default),
    }
}
