//! Structured-payload extraction from loosely formatted model output.
//!
//! Models wrap JSON in markdown fences, lead with prose, or trail with
//! pleasantries. Rather than slicing fixed-length fence markers, locate the
//! first structured-data token and the last matching closing token and parse
//! what lies between.

use serde_json::Value;

/// Result of attempting to pull a JSON payload out of raw model text.
///
/// `Failed` keeps the offending text so the caller can log it before
/// degrading to an empty result — decode failures are deliberately not
/// errors at this layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(Value),
    Failed { raw: String },
}

/// Extracts the JSON array or object embedded in `text`, ignoring any
/// surrounding fencing or prose.
pub fn extract_json(text: &str) -> ParseOutcome {
    let failed = || ParseOutcome::Failed {
        raw: text.to_string(),
    };

    let Some(start) = text.find(['[', '{']) else {
        return failed();
    };
    let close = if text.as_bytes()[start] == b'[' { ']' } else { '}' };
    let Some(end) = text.rfind(close) else {
        return failed();
    };
    if end < start {
        return failed();
    }

    match serde_json::from_str(&text[start..=end]) {
        Ok(value) => ParseOutcome::Parsed(value),
        Err(_) => failed(),
    }
}
