//! Best-effort coercion of model text into typed JSON.

use serde::de::DeserializeOwned;

/// The substring from the first `{` to the last `}`, inclusive.
///
/// Models often wrap JSON in prose or code fences; this strips both.
#[must_use]
pub fn extract_braced(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Parse `text` as `T`, first as a whole and then via [`extract_braced`].
#[must_use]
pub fn coerce_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    if let Ok(value) = serde_json::from_str(text) {
        return Some(value);
    }
    let braced = extract_braced(text)?;
    match serde_json::from_str(braced) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "model text did not coerce to JSON");
            None
        }
    }
}
