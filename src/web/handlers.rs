//! HTTP request handlers

use super::error::{ApiError, Service};
use super::state::AppState;
use crate::autocomplete::QUERY_REQUIRED;
use crate::engines::EngineDescriptor;
use crate::error::ProxyError;
use crate::search::{first_values, SearchParams, SearchQuery};
use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Wrap a JSON body with a public `Cache-Control` max-age
fn cached<T: Serialize>(max_age: u32, body: T) -> Response {
    (
        [(header::CACHE_CONTROL, format!("public, max-age={max_age}"))],
        Json(body),
    )
        .into_response()
}

/// `GET /api/search`
pub async fn search(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let params = SearchParams::from_query(raw.as_deref());

    let query = SearchQuery::from_params(&params, &state.settings.search)
        .map_err(|e| ApiError::new(Service::Search, e))?;

    let response = state
        .search
        .execute(&query)
        .await
        .map_err(|e| ApiError::new(Service::Search, e))?;

    Ok(cached(state.settings.cache.search, response))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

/// `GET /api/suggest`
pub async fn suggest(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let params = first_values(raw.as_deref());

    let query = params.get("q").map(|q| q.trim()).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::new(
            Service::Suggest,
            ProxyError::Validation(QUERY_REQUIRED.to_string()),
        ));
    }
    let language = params
        .get("language")
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .unwrap_or(state.settings.search.default_language.as_str());

    let mut suggestions = state
        .autocompleter
        .suggest(query, language)
        .await
        .map_err(|e| ApiError::new(Service::Suggest, e))?;

    // Echoes of the query itself are not useful as suggestions
    let lowered = query.to_lowercase();
    suggestions.retain(|s| s.to_lowercase() != lowered);

    Ok(cached(
        state.settings.cache.suggest,
        SuggestResponse { suggestions },
    ))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EnginesResponse {
    pub engines: Vec<EngineDescriptor>,
}

/// `GET /api/engines`
pub async fn engines(State(state): State<AppState>) -> Response {
    info!("Listing {} engines from static configuration", state.registry.len());
    cached(
        state.settings.cache.engines,
        EnginesResponse {
            engines: state.registry.all().to_vec(),
        },
    )
}

/// CORS preflight: empty 200, headers come from the route's layer
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
