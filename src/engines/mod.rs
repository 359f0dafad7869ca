//! Search engine module
//!
//! Lists the engines the aggregator is configured with.

mod registry;

pub use registry::{EngineDescriptor, EngineRegistry};
