//! HTTP networking module
//!
//! Provides the outbound client used to talk to the SearXNG instance.

mod client;

pub use client::HttpClient;
