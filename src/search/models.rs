//! Search query and related data models

use crate::config::SearchSettings;
use crate::error::{ProxyError, ProxyResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decode a raw query string, keeping the first value of each repeated key
pub fn first_values(raw: Option<&str>) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
        values
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    values
}

/// Raw query-string parameters of `/api/search`.
///
/// Everything is kept as text so malformed numbers fall back to defaults
/// instead of failing extraction.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Page number
    pub pageno: Option<String>,
    /// Categories (comma-separated)
    pub categories: Option<String>,
    /// Engines (comma-separated)
    pub engines: Option<String>,
    /// Language
    pub language: Option<String>,
    /// Time range
    pub time_range: Option<String>,
    /// Safe search level
    pub safesearch: Option<String>,
}

/// A validated search request, ready to be sent upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Trimmed, non-empty query text
    pub query: String,
    /// Page number (1-indexed)
    pub pageno: u32,
    pub categories: String,
    /// Comma-separated engine names, if restricted
    pub engines: Option<String>,
    /// Language code
    pub language: String,
    pub time_range: Option<String>,
    /// Safe search level (0, 1, 2)
    pub safesearch: u8,
}

impl SearchParams {
    /// Read the parameters from a raw query string
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut values = first_values(raw);
        Self {
            q: values.remove("q"),
            pageno: values.remove("pageno"),
            categories: values.remove("categories"),
            engines: values.remove("engines"),
            language: values.remove("language"),
            time_range: values.remove("time_range"),
            safesearch: values.remove("safesearch"),
        }
    }
}

pub const QUERY_REQUIRED: &str = "Search query is required";

impl SearchQuery {
    /// Create a query with default options, rejecting blank or oversized text
    pub fn new(text: &str, max_len: usize) -> ProxyResult<Self> {
        let query = text.trim();
        if query.is_empty() {
            return Err(ProxyError::Validation(QUERY_REQUIRED.to_string()));
        }
        if query.chars().count() > max_len {
            return Err(ProxyError::Validation(format!(
                "Search query is too long (max {max_len} characters)"
            )));
        }

        Ok(Self {
            query: query.to_string(),
            pageno: 1,
            categories: "general".to_string(),
            engines: None,
            language: "en".to_string(),
            time_range: None,
            safesearch: 0,
        })
    }

    /// Build a query from raw route parameters, filling gaps from `defaults`
    pub fn from_params(params: &SearchParams, defaults: &SearchSettings) -> ProxyResult<Self> {
        let text = params.q.as_deref().unwrap_or_default();
        let mut query = Self::new(text, defaults.max_query_length)?;

        query.pageno = parse_number(params.pageno.as_deref())
            .filter(|&p| p > 0)
            .unwrap_or(1);
        query.categories =
            non_empty(params.categories.as_deref()).unwrap_or_else(|| defaults.default_category.clone());
        query.language =
            non_empty(params.language.as_deref()).unwrap_or_else(|| defaults.default_language.clone());
        query.engines = non_empty(params.engines.as_deref());
        query.time_range = non_empty(params.time_range.as_deref());
        query.safesearch = parse_number(params.safesearch.as_deref())
            .unwrap_or(defaults.default_safesearch as u32)
            .min(2) as u8;

        Ok(query)
    }

    /// Set language
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.language = lang.into();
        self
    }

    /// Set safe search
    pub fn with_safesearch(mut self, level: u8) -> Self {
        self.safesearch = level.min(2);
        self
    }

    /// Set page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.pageno = page.max(1);
        self
    }

    pub fn with_engines(mut self, engines: impl Into<String>) -> Self {
        self.engines = Some(engines.into());
        self
    }

    pub fn with_time_range(mut self, range: impl Into<String>) -> Self {
        self.time_range = Some(range.into());
        self
    }

    /// Query-string parameters for the aggregator's `/search` endpoint.
    ///
    /// Optional fields are only present when set; nothing appears twice.
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", self.query.clone()),
            ("format", "json".to_string()),
            ("pageno", self.pageno.to_string()),
            ("categories", self.categories.clone()),
            ("language", self.language.clone()),
            ("safesearch", self.safesearch.to_string()),
        ];
        if let Some(ref engines) = self.engines {
            params.push(("engines", engines.clone()));
        }
        if let Some(ref range) = self.time_range {
            params.push(("time_range", range.clone()));
        }
        params
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn parse_number(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse().ok())
}
