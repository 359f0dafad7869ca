//! Result filtering and reshaping
//!
//! The policy is fixed at startup: an engine allow-set plus a table of
//! host/path deny rules. Nothing about it can be changed per request.

use super::types::{NormalizedResult, SearchResponse, UpstreamResponse, UpstreamResult};
use crate::config::{DenyRule, FilterSettings};
use std::collections::HashSet;
use url::Url;

/// Filters upstream hits and maps them onto [`NormalizedResult`]
#[derive(Debug, Clone)]
pub struct ResultFilter {
    allowed_engines: HashSet<String>,
    deny: Vec<DenyRule>,
}

impl ResultFilter {
    pub fn new(settings: &FilterSettings) -> Self {
        Self {
            allowed_engines: settings.allowed_engines.iter().cloned().collect(),
            deny: settings
                .deny
                .iter()
                .map(|rule| DenyRule {
                    domain: rule.domain.to_lowercase(),
                    path_fragments: rule
                        .path_fragments
                        .iter()
                        .map(|f| f.to_lowercase())
                        .collect(),
                })
                .collect(),
        }
    }

    /// Whether a single hit survives the policy
    pub fn accepts(&self, result: &UpstreamResult) -> bool {
        self.allowed_engines.contains(&result.engine) && !self.is_denied(&result.url)
    }

    fn is_denied(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => {
                let host = parsed.host_str().unwrap_or_default().to_lowercase();
                let path = parsed.path().to_lowercase();
                self.deny.iter().any(|rule| {
                    host_matches(&host, &rule.domain)
                        && rule.path_fragments.iter().any(|f| path.contains(f.as_str()))
                })
            }
            // Unparseable: fall back to plain substring matching on the whole string
            Err(_) => {
                let url = url.to_lowercase();
                self.deny.iter().any(|rule| {
                    url.contains(rule.domain.as_str())
                        && rule.path_fragments.iter().any(|f| url.contains(f.as_str()))
                })
            }
        }
    }

    /// Filter `results`, keeping upstream order
    pub fn apply(&self, results: Vec<UpstreamResult>) -> Vec<NormalizedResult> {
        results
            .into_iter()
            .filter(|r| self.accepts(r))
            .map(NormalizedResult::from)
            .collect()
    }

    /// Build the outgoing response from a full upstream payload.
    ///
    /// The upstream `number_of_results` is passed through untouched.
    pub fn normalize(&self, upstream: UpstreamResponse) -> SearchResponse {
        SearchResponse {
            query: upstream.query,
            total_results: upstream.number_of_results,
            results: self.apply(upstream.results),
            answers: upstream.answers,
            corrections: upstream.corrections,
            suggestions: upstream.suggestions,
            search_time: upstream.results_time,
            engines_time: upstream.engines_time,
            unresponsive_engines: upstream.unresponsive_engines,
            web_search_url: upstream.web_search_url,
        }
    }
}

impl Default for ResultFilter {
    fn default() -> Self {
        Self::new(&FilterSettings::default())
    }
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
