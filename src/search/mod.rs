//! Search module
//!
//! Validates incoming search parameters and forwards them to the
//! aggregator's JSON search API.

mod executor;
mod models;

pub use executor::Search;
pub use models::*;
