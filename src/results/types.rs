//! Result type definitions
//!
//! `Upstream*` types mirror the aggregator's JSON; the rest is what the
//! `/api/search` route sends back.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treat an explicit `null` the same as a missing key
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single search hit as the aggregator returns it.
///
/// Only the fields that survive normalization are decoded; aggregator
/// bookkeeping (positions, grouping flags, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamResult {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub content: String,
    #[serde(deserialize_with = "nullable")]
    pub engine: String,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    #[serde(deserialize_with = "nullable")]
    pub pretty_url: String,
    #[serde(deserialize_with = "nullable")]
    pub score: f64,
}

/// The aggregator's `/search?format=json` payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpstreamResponse {
    #[serde(deserialize_with = "nullable")]
    pub query: String,
    #[serde(deserialize_with = "nullable")]
    pub number_of_results: u64,
    #[serde(deserialize_with = "nullable")]
    pub results: Vec<UpstreamResult>,
    #[serde(deserialize_with = "nullable")]
    pub answers: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub corrections: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub suggestions: Vec<Value>,
    #[serde(deserialize_with = "nullable")]
    pub unresponsive_engines: Vec<Value>,
    pub web_search_url: Option<String>,
    pub results_time: Option<f64>,
    pub engines_time: Option<f64>,
}

/// One result in the application's own shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    pub title: String,
    pub url: String,
    pub content: String,
    pub engine: String,
    pub category: String,
    pub pretty_url: String,
    pub score: f64,
}

impl From<UpstreamResult> for NormalizedResult {
    fn from(result: UpstreamResult) -> Self {
        Self {
            title: result.title,
            url: result.url,
            content: result.content,
            engine: result.engine,
            category: result.category,
            pretty_url: result.pretty_url,
            score: result.score,
        }
    }
}

/// Body of a successful `/api/search` response.
///
/// `total_results` is the aggregator's own count before filtering, so it
/// has no arithmetic relation to `results.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub total_results: u64,
    pub results: Vec<NormalizedResult>,
    pub answers: Vec<Value>,
    pub corrections: Vec<Value>,
    pub suggestions: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engines_time: Option<f64>,
    pub unresponsive_engines: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_search_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_decode_tolerates_missing_fields() {
        let raw = json!({
            "query": "rust",
            "number_of_results": 1200,
            "results": [
                {"title": "Rust", "url": "https://www.rust-lang.org/", "engine": "google",
                 "positions": [1, 3], "open_group": true, "parsed_url": ["https", "www.rust-lang.org"]}
            ],
            "infoboxes": [{"infobox": "Rust"}],
            "unresponsive_engines": [["brave", "timeout"]]
        });
        let decoded: UpstreamResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(decoded.number_of_results, 1200);
        assert_eq!(decoded.results.len(), 1);
        assert_eq!(decoded.results[0].content, "");
        assert_eq!(decoded.unresponsive_engines[0], json!(["brave", "timeout"]));
        assert!(decoded.results_time.is_none());
    }

    #[test]
    fn test_upstream_decode_tolerates_nulls() {
        let raw = json!({
            "query": null,
            "number_of_results": null,
            "results": [
                {"title": "A", "url": "https://a.example/", "engine": "google",
                 "content": null, "category": null, "pretty_url": null, "score": null,
                 "positions": null, "template": 7}
            ],
            "answers": null,
            "suggestions": null
        });
        let decoded: UpstreamResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(decoded.query, "");
        assert_eq!(decoded.number_of_results, 0);
        let hit = &decoded.results[0];
        assert_eq!(hit.title, "A");
        assert_eq!(hit.content, "");
        assert_eq!(hit.category, "");
        assert_eq!(hit.pretty_url, "");
        assert_eq!(hit.score, 0.0);
        assert!(decoded.answers.is_empty());
        assert!(decoded.suggestions.is_empty());
    }

    #[test]
    fn test_normalized_result_field_names() {
        let result = NormalizedResult::from(UpstreamResult {
            title: "Rust".into(),
            url: "https://www.rust-lang.org/".into(),
            engine: "google".into(),
            pretty_url: "rust-lang.org".into(),
            score: 2.5,
            ..Default::default()
        });
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["prettyUrl"], "rust-lang.org");
        assert_eq!(value["score"], 2.5);
        assert!(value.get("positions").is_none());
    }
}
