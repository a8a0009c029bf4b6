// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw result of fetching a page, before any HTML parsing
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Response body bytes
    pub body: Vec<u8>,
    /// HTTP status code of the response
    pub status_code: u16,
    /// Size of the body in bytes
    pub page_size: usize,
    /// Seconds from sending the request to having the full body
    pub load_time: f64,
}

/// Heading text grouped by level, each in document order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
}

/// Flat attribute record extracted from a fetched page.
///
/// Every field is always populated (possibly empty or zero), so consumers
/// never need existence checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageAttributes {
    /// The URL the caller asked us to analyze
    pub url: String,
    /// First `<title>` text, or "No Title"
    pub title: String,
    /// `<meta name="description">` content, or empty
    pub description: String,
    /// Social title override (og:title / twitter:title), falls back to `title`
    pub meta_title: String,
    /// Meta description as seen while scanning all meta tags
    pub meta_description: String,
    pub headings: Headings,
    /// Links whose href starts with "http" or "/"
    pub links_count: usize,
    /// Images with a non-empty src
    pub images_count: usize,
    /// Meta tag name (or property) to content
    pub meta_tags: BTreeMap<String, String>,
    pub canonical_url: String,
    /// Parsed JSON-LD blocks; unparseable blocks are skipped
    pub schema_data: Vec<serde_json::Value>,
    /// Visible text with collapsed whitespace, capped in length
    pub text_content: String,
    pub page_size: usize,
    pub load_time: f64,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attributes_are_empty() {
        let page = PageAttributes::default();
        assert!(page.title.is_empty());
        assert_eq!(page.links_count, 0);
        assert!(page.schema_data.is_empty());
        assert_eq!(page.load_time, 0.0);
    }
}
