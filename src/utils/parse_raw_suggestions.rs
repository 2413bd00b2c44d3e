use crate::types::RawSuggestion;
use log::debug;
use serde_json::Value;

/// Parses model output text into raw suggestion records.
///
/// An optional Markdown code fence (```` ```json ... ``` ````) around the payload is removed.
/// Anything that is not a JSON array is treated as an empty result rather than an error.
pub fn parse_raw_suggestions(text: &str) -> Vec<RawSuggestion> {
    let payload = strip_code_fence(text.trim());

    match serde_json::from_str::<Value>(payload) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            debug!("Ignoring non-array suggestion payload: {}", other);
            vec![]
        }
        Err(err) => {
            debug!("Ignoring unparseable suggestion payload: {}", err);
            vec![]
        }
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the optional language tag on the opening fence
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };

    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}
