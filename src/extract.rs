//! Tolerant JSON extraction from model output
//!
//! Gemini responses in free-text and search-grounded modes reliably open
//! with valid JSON but may wrap it in a markdown code fence, prepend prose,
//! or append trailing commentary. This module recovers the JSON value or
//! fails with an explicit extraction error.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Recover a single JSON value from arbitrary model text.
///
/// Strategy:
/// 1. If the text contains a fenced code block (optionally tagged `json`),
///    work on the block's inner content.
/// 2. Find the first `[` or `{` and try to parse from there directly.
/// 3. If that fails, salvage the substring up to the last matching closing
///    bracket and parse that instead.
///
/// The salvage step is a heuristic, not a guarantee: deeply malformed or
/// nested-mismatched content still fails, with `Error::Extraction`.
pub fn extract_json(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    let working = fenced_block(trimmed).unwrap_or(trimmed);

    let start = working
        .find(['[', '{'])
        .ok_or_else(|| Error::Extraction("no JSON start found".to_string()))?;

    let candidate = &working[start..];
    if let Ok(value) = serde_json::from_str(candidate) {
        return Ok(value);
    }

    let closer = if working.as_bytes()[start] == b'[' {
        ']'
    } else {
        '}'
    };
    let end = working
        .rfind(closer)
        .filter(|&end| end > start)
        .ok_or_else(|| Error::Extraction(format!("no closing '{}' found", closer)))?;

    serde_json::from_str(&working[start..=end])
        .map_err(|e| Error::Extraction(format!("salvage parse failed: {}", e)))
}

/// Extract JSON and coerce it into a typed record.
///
/// A successfully extracted value that does not match the expected shape
/// surfaces as `Error::Shape`, keeping malformed-output and wrong-shape
/// failures distinguishable to callers.
pub fn extract_typed<T: DeserializeOwned>(text: &str) -> Result<T> {
    let value = extract_json(text)?;
    serde_json::from_value(value).map_err(|e| Error::Shape(e.to_string()))
}

/// Returns the inner content of the first fenced code block, if any.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after = &text[open + 3..];
    let close = after.find("```")?;
    let mut inner = after[..close].trim();
    if let Some(tagged) = inner.strip_prefix("json") {
        inner = tagged.trim_start();
    }
    Some(inner)
}
