// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::{AnalysisError, Result};
use crate::models::config::FetchConfig;
use crate::models::page::FetchedPage;
use std::time::Instant;
use url::Url;

/// Check that `raw` is an absolute http(s) URL with a host.
///
/// The raw text itself must start with `scheme://` followed by a non-empty
/// authority, with no surrounding whitespace. `http:example.com` is rejected.
pub fn validate_url(raw: &str) -> Result<Url> {
    if raw.is_empty() || raw.trim() != raw {
        return Err(AnalysisError::InvalidUrl);
    }

    let (_, rest) = raw.split_once("://").ok_or(AnalysisError::InvalidUrl)?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if authority.is_empty() {
        return Err(AnalysisError::InvalidUrl);
    }

    let parsed = Url::parse(raw).map_err(|_| AnalysisError::InvalidUrl)?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(AnalysisError::InvalidUrl),
    }

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(AnalysisError::UnsupportedScheme(other.to_string())),
    }
}

/// Fetches single pages over a shared, connection-pooling HTTP client
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| AnalysisError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// GET the page. Network failures and non-2xx statuses are `UnreachableHost`.
    pub async fn fetch(&self, raw_url: &str) -> Result<FetchedPage> {
        let url = validate_url(raw_url)?;

        let started = Instant::now();
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await?
            .error_for_status()?;

        // Response time up to the headers, not the body download
        let load_time = started.elapsed().as_secs_f64();
        let status_code = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(
            url = %url,
            status = status_code,
            bytes = body.len(),
            load_time,
            "Fetched page"
        );

        Ok(FetchedPage {
            page_size: body.len(),
            body,
            status_code,
            load_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_validate_rejects_relative() {
        assert!(matches!(
            validate_url("not-a-url"),
            Err(AnalysisError::InvalidUrl)
        ));
        assert!(matches!(validate_url(""), Err(AnalysisError::InvalidUrl)));
    }

    #[test]
    fn test_validate_rejects_missing_host() {
        assert!(matches!(
            validate_url("mailto:someone@example.com"),
            Err(AnalysisError::InvalidUrl)
        ));
    }

    #[test]
    fn test_validate_rejects_scheme_without_authority() {
        for raw in [
            "http:example.com",
            "http:/example.com",
            "https:\\\\example.com",
            "http:///path",
            "http://?q=1",
        ] {
            assert!(
                matches!(validate_url(raw), Err(AnalysisError::InvalidUrl)),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_validate_rejects_surrounding_whitespace() {
        assert!(matches!(
            validate_url(" https://example.com"),
            Err(AnalysisError::InvalidUrl)
        ));
        assert!(matches!(
            validate_url("https://example.com\n"),
            Err(AnalysisError::InvalidUrl)
        ));
    }

    #[test]
    fn test_validate_rejects_other_schemes() {
        match validate_url("ftp://example.com") {
            Err(AnalysisError::UnsupportedScheme(scheme)) => assert_eq!(scheme, "ftp"),
            other => panic!("expected UnsupportedScheme, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_fails_before_network() {
        let fetcher = PageFetcher::new(&FetchConfig::default()).unwrap();
        let result = fetcher.fetch("not-a-valid-url").await;
        assert!(matches!(result, Err(AnalysisError::InvalidUrl)));
    }

    #[tokio::test]
    async fn test_fetch_closed_port_is_unreachable() {
        let fetcher = PageFetcher::new(&FetchConfig::default()).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(AnalysisError::UnreachableHost(_))));
    }
}
