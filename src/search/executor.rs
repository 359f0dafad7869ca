//! Search execution against the upstream aggregator

use super::models::SearchQuery;
use crate::config::UpstreamSettings;
use crate::error::ProxyResult;
use crate::network::HttpClient;
use crate::results::{ResultFilter, SearchResponse, UpstreamResponse};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Upstream search client: one bounded call per query, no retries
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Full URL of the aggregator's search endpoint
    endpoint: String,
    timeout: Duration,
    filter: ResultFilter,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, settings: &UpstreamSettings, filter: ResultFilter) -> Self {
        Self {
            client,
            endpoint: settings.endpoint("search"),
            timeout: settings.search_timeout(),
            filter,
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the raw upstream payload for `query`
    pub async fn fetch(&self, query: &SearchQuery) -> ProxyResult<UpstreamResponse> {
        let params = query.upstream_params();
        debug!("Searching {} with {:?}", self.endpoint, params);
        self.client.get_json(&self.endpoint, &params, self.timeout).await
    }

    /// Fetch and normalize
    pub async fn execute(&self, query: &SearchQuery) -> ProxyResult<SearchResponse> {
        let start = Instant::now();
        let upstream = self.fetch(query).await?;
        let received = upstream.results.len();

        let response = self.filter.normalize(upstream);

        info!(
            "Search '{}' page {}: {} of {} upstream results kept in {:?}",
            query.query,
            query.pageno,
            response.results.len(),
            received,
            start.elapsed()
        );

        Ok(response)
    }
}
