//! Common utilities shared across the LDOCE scraper tools.
//!
//! This module provides the dictionary page fetch, text cleanup, and
//! pronunciation reformatting helpers, plus the CallToolResult wrappers.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use rmcp::model::{CallToolResult, Content};
use scraper::{ElementRef, Selector};
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::config::DictionaryConfig;
use crate::domains::tools::ToolError;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex compiles"));

/// Fetch the dictionary page for a word.
///
/// Single timed GET against `{base_url}/{word}` with the configured
/// user-agent. Network errors, timeouts, and non-success statuses all
/// propagate; there is no retry.
pub fn fetch_page(config: &DictionaryConfig, word: &str) -> Result<String, ToolError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(ToolError::invalid_arguments("'word' must not be empty"));
    }

    let url = format!("{}/{}", config.base_url.trim_end_matches('/'), word);
    debug!("Fetching dictionary page: {}", url);

    let client = reqwest::blocking::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| ToolError::execution_failed(format!("HTTP client setup failed: {}", e)))?;

    let response = client
        .get(&url)
        .send()
        .map_err(|e| ToolError::execution_failed(format!("Request for '{}' failed: {}", word, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ToolError::execution_failed(format!(
            "Dictionary page for '{}' returned status {}",
            word, status
        )));
    }

    response
        .text()
        .map_err(|e| ToolError::execution_failed(format!("Failed to read page body: {}", e)))
}

/// Parse a CSS selector known at compile time.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector parses")
}

/// Collect the text of an element with runs of whitespace collapsed.
pub fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    WHITESPACE.replace_all(&raw, " ").trim().to_string()
}

/// Text of the first element matching `css` under `scope`, or empty string.
pub fn first_text(scope: ElementRef<'_>, css: &str) -> String {
    let sel = selector(css);
    scope
        .select(&sel)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Text of the first element matching `css` under `scope`, or `None` when
/// the node is absent or empty.
pub fn first_text_opt(scope: ElementRef<'_>, css: &str) -> Option<String> {
    Some(first_text(scope, css)).filter(|t| !t.is_empty())
}

/// Normalize a raw pronunciation string to `/.../` form.
///
/// The site wraps IPA in slashes with stray whitespace and line breaks;
/// anything after the British/American `$` separator is kept as-is.
pub fn format_pronunciation(raw: &str) -> String {
    let cleaned = WHITESPACE.replace_all(raw, " ");
    let cleaned = cleaned.trim().trim_matches('/').trim();
    if cleaned.is_empty() {
        String::new()
    } else {
        format!("/{}/", cleaned)
    }
}

/// Split a raw pronunciation string into (British, American) variants.
///
/// The site separates the two with `$`; a missing separator means the
/// British form applies to both sides of the Atlantic.
pub fn split_pronunciation(raw: &str) -> (Option<String>, Option<String>) {
    let cleaned = WHITESPACE.replace_all(raw, " ");
    let cleaned = cleaned.trim().trim_matches('/').trim();
    if cleaned.is_empty() {
        return (None, None);
    }

    match cleaned.split_once('$') {
        Some((british, american)) => (
            Some(format_pronunciation(british)).filter(|p| !p.is_empty()),
            Some(format_pronunciation(american)).filter(|p| !p.is_empty()),
        ),
        None => (Some(format!("/{}/", cleaned)), None),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Serialize a document as a single pretty-printed JSON text blob.
pub fn json_result<T: Serialize>(document: &T) -> CallToolResult {
    match serde_json::to_string_pretty(document) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}
