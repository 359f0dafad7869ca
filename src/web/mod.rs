//! Web server module
//!
//! Exposes the search, suggest and engines endpoints as a JSON API.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::{ApiError, ErrorBody, Service};
pub use handlers::{EnginesResponse, SuggestResponse};
pub use routes::create_router;
pub use state::AppState;
