//! Result types and the filter that normalizes upstream hits

mod filter;
mod types;

pub use filter::ResultFilter;
pub use types::*;
