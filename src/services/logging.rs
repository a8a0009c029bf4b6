// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Logging setup and helpers for keeping secrets and large payloads out of logs.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "site_analysis_agent=info,tower_http=info";

/// Install the global tracing subscriber. `RUST_LOG` overrides the defaults.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Mask a secret for logging.
/// Shows the first four characters and the length: "AIza***(39 chars)"
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<not set>".to_string();
    }
    let count = secret.chars().count();
    if count <= 8 {
        return format!("***({} chars)", count);
    }
    let head: String = secret.chars().take(4).collect();
    format!("{}***({} chars)", head, count)
}

/// First `max_chars` characters of `text`, with "..." appended when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
