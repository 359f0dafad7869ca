//! Search suggestions from the aggregator's autocompleter

mod payload;

pub use payload::SuggestionPayload;

use crate::config::{SuggestSettings, UpstreamSettings};
use crate::error::{ProxyError, ProxyResult};
use crate::network::HttpClient;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const QUERY_REQUIRED: &str = "Query parameter is required";

/// Suggest client for the aggregator's `/autocompleter` endpoint.
///
/// Returns at most `limit` entries. Duplicates and the query itself are
/// left in; filtering those is up to the caller.
pub struct Autocompleter {
    client: HttpClient,
    endpoint: String,
    timeout: Duration,
    limit: usize,
}

impl Autocompleter {
    pub fn new(client: HttpClient, upstream: &UpstreamSettings, settings: &SuggestSettings) -> Self {
        Self {
            client,
            endpoint: upstream.endpoint("autocompleter"),
            timeout: upstream.suggest_timeout(),
            limit: settings.max_suggestions,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch suggestions for `query` in `lang`
    pub async fn suggest(&self, query: &str, lang: &str) -> ProxyResult<Vec<String>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ProxyError::Validation(QUERY_REQUIRED.to_string()));
        }

        let params = [("q", query.to_string()), ("language", lang.to_string())];
        let body: Value = self
            .client
            .get_json(&self.endpoint, &params, self.timeout)
            .await?;

        let suggestions = SuggestionPayload::from_value(body).into_suggestions(self.limit);
        debug!("{} suggestions for '{}'", suggestions.len(), query);
        Ok(suggestions)
    }
}
