//! MAYA Search: a JSON front end for a SearXNG instance
//!
//! Forwards search and autocomplete requests to the aggregator, reshapes
//! and filters what comes back, and serves a static engine list.

pub mod autocomplete;
pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use error::{ProxyError, ProxyResult};
pub use results::{NormalizedResult, SearchResponse};
pub use search::{Search, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
