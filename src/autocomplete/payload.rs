//! Decoding of the autocompleter's response body
//!
//! The aggregator answers in one of several shapes depending on the backend
//! it proxies to. The shape is detected once here and every caller gets a
//! flat list.

use serde_json::Value;

/// The shapes an autocomplete payload is known to come in
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionPayload {
    /// `[query, [suggestions...], ...]`
    Nested(Vec<Value>),
    /// `"a, b, c"`
    Delimited(String),
    /// `[suggestions...]`
    Flat(Vec<Value>),
    /// Anything else (objects, null, numbers); yields no suggestions
    Unsupported,
}

impl SuggestionPayload {
    /// Classify a decoded body. Nested extraction is tried first, then
    /// delimiter splitting, then the array is taken as-is.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(mut items) => {
                if items.len() > 1 && items[1].is_array() {
                    match items.swap_remove(1) {
                        Value::Array(inner) => SuggestionPayload::Nested(inner),
                        _ => SuggestionPayload::Unsupported,
                    }
                } else {
                    SuggestionPayload::Flat(items)
                }
            }
            Value::String(text) => SuggestionPayload::Delimited(text),
            _ => SuggestionPayload::Unsupported,
        }
    }

    /// Flatten into trimmed, non-empty strings, keeping order, at most `limit`
    pub fn into_suggestions(self, limit: usize) -> Vec<String> {
        let entries: Vec<String> = match self {
            SuggestionPayload::Nested(items) | SuggestionPayload::Flat(items) => {
                items.iter().map(coerce).collect()
            }
            SuggestionPayload::Delimited(text) => text.split(',').map(String::from).collect(),
            SuggestionPayload::Unsupported => Vec::new(),
        };

        entries
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .take(limit)
            .collect()
    }
}

/// Turn one entry into text
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        Value::Object(map) => ["text", "title"]
            .iter()
            .filter_map(|key| map.get(*key))
            .filter_map(Value::as_str)
            .find(|s| !s.trim().is_empty())
            .map(String::from)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}
