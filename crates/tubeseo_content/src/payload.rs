//! Decoding of text-model payloads.

use serde::de::DeserializeOwned;
use tubeseo_error::JsonError;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Remove one optional ```` ```json ```` markdown fence around a payload.
///
/// Surrounding whitespace is trimmed first. The opening and closing markers
/// are stripped independently, each at most once.
///
/// # Examples
///
/// ```
/// use tubeseo_content::strip_json_fence;
///
/// assert_eq!(strip_json_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(strip_json_fence("  {\"a\":1} "), "{\"a\":1}");
/// ```
pub fn strip_json_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let opened = trimmed
        .strip_prefix(FENCE_OPEN)
        .map(str::trim_start)
        .unwrap_or(trimmed);
    opened
        .strip_suffix(FENCE_CLOSE)
        .map(str::trim_end)
        .unwrap_or(opened)
}

/// Strip an optional fence and decode the payload as `T`.
pub fn parse_json_payload<T: DeserializeOwned>(raw: &str) -> Result<T, JsonError> {
    serde_json::from_str(strip_json_fence(raw)).map_err(|e| JsonError::new(e.to_string()))
}
