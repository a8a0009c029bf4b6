// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Turns fetched HTML into a flat [`PageAttributes`] record.

use crate::error::{AnalysisError, Result};
use crate::models::page::{FetchedPage, Headings, PageAttributes};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// Maximum number of characters of visible text kept on the record
pub const MAX_TEXT_CHARS: usize = 10_000;

const NO_TITLE: &str = "No Title";

/// Build the attribute record for a fetched page.
pub fn extract_page_attributes(url: &str, fetched: &FetchedPage) -> Result<PageAttributes> {
    let html = String::from_utf8_lossy(&fetched.body);
    let mut page = parse_html(&html)?;
    page.url = url.to_string();
    page.page_size = fetched.page_size;
    page.load_time = fetched.load_time;
    page.status_code = fetched.status_code;
    Ok(page)
}

/// Parse markup into attributes. Fetch-related fields are left zeroed.
pub fn parse_html(html: &str) -> Result<PageAttributes> {
    let document = Html::parse_document(html);

    let title = first_text(&document, "title")?.unwrap_or_else(|| NO_TITLE.to_string());
    let description = extract_description(&document)?;
    let meta = extract_meta_tags(&document, &title, &description)?;

    Ok(PageAttributes {
        title,
        description,
        meta_title: meta.title,
        meta_description: meta.description,
        headings: Headings {
            h1: all_texts(&document, "h1")?,
            h2: all_texts(&document, "h2")?,
            h3: all_texts(&document, "h3")?,
        },
        links_count: count_links(&document)?,
        images_count: count_images(&document)?,
        meta_tags: meta.tags,
        canonical_url: extract_canonical(&document)?,
        schema_data: extract_schema_data(&document)?,
        text_content: visible_text(&document),
        ..Default::default()
    })
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| AnalysisError::Extraction(format!("invalid selector '{}': {:?}", css, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn first_text(document: &Html, css: &str) -> Result<Option<String>> {
    let selector = selector(css)?;
    Ok(document.select(&selector).next().map(element_text))
}

fn all_texts(document: &Html, css: &str) -> Result<Vec<String>> {
    let selector = selector(css)?;
    Ok(document.select(&selector).map(element_text).collect())
}

/// Content of the first `<meta name="description">`, name matched case-insensitively
fn extract_description(document: &Html) -> Result<String> {
    let selector = selector("meta[name]")?;
    Ok(document
        .select(&selector)
        .find(|meta| {
            meta.value()
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case("description"))
        })
        .and_then(|meta| meta.value().attr("content"))
        .unwrap_or_default()
        .to_string())
}

struct MetaScan {
    tags: BTreeMap<String, String>,
    title: String,
    description: String,
}

/// Collect every named meta tag and pick up social title / description overrides.
fn extract_meta_tags(document: &Html, title: &str, description: &str) -> Result<MetaScan> {
    let selector = selector("meta")?;
    let mut scan = MetaScan {
        tags: BTreeMap::new(),
        title: title.to_string(),
        description: description.to_string(),
    };

    for meta in document.select(&selector) {
        let element = meta.value();
        let name = element
            .attr("name")
            .filter(|name| !name.is_empty())
            .or_else(|| element.attr("property"));
        let (Some(name), Some(content)) = (name, element.attr("content")) else {
            continue;
        };
        if name.is_empty() || content.is_empty() {
            continue;
        }

        scan.tags.insert(name.to_string(), content.to_string());

        let lowered = name.to_lowercase();
        if lowered == "description" {
            scan.description = content.to_string();
        } else if lowered == "og:title" || lowered == "twitter:title" {
            scan.title = content.to_string();
        }
    }

    Ok(scan)
}

fn count_links(document: &Html) -> Result<usize> {
    let selector = selector("a[href]")?;
    Ok(document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| href.starts_with("http") || href.starts_with('/'))
        .count())
}

fn count_images(document: &Html) -> Result<usize> {
    let selector = selector("img")?;
    Ok(document
        .select(&selector)
        .filter(|img| img.value().attr("src").is_some_and(|src| !src.is_empty()))
        .count())
}

fn extract_canonical(document: &Html) -> Result<String> {
    let selector = selector("link[rel]")?;
    Ok(document
        .select(&selector)
        .find(|link| {
            link.value().attr("rel").is_some_and(|rel| {
                rel.split_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("canonical"))
            })
        })
        .and_then(|link| link.value().attr("href"))
        .unwrap_or_default()
        .to_string())
}

/// Parse every JSON-LD block; malformed blocks are skipped.
fn extract_schema_data(document: &Html) -> Result<Vec<serde_json::Value>> {
    let selector = selector(r#"script[type="application/ld+json"]"#)?;
    let mut blocks = Vec::new();
    for script in document.select(&selector) {
        let raw = script.text().collect::<String>();
        match serde_json::from_str(raw.trim()) {
            Ok(value) => blocks.push(value),
            Err(e) => tracing::debug!(error = %e, "Skipping malformed JSON-LD block"),
        }
    }
    Ok(blocks)
}

/// Visible text outside script/style, capped at [`MAX_TEXT_CHARS`].
///
/// Adjacent text nodes are joined as-is; only whitespace present in the
/// markup is collapsed, so `<b>Bl</b><i>og</i>` reads as `Blog`.
fn visible_text(document: &Html) -> String {
    let mut raw = String::new();
    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| matches!(el.name(), "script" | "style"))
        });
        if !hidden {
            raw.push_str(text);
        }
    }

    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_TEXT_CHARS)
        .collect()
}
