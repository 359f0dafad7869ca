//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue,
    },
    routing::{get, MethodRouter},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // API routes
        .route(
            "/api/search",
            with_cors(
                get(handlers::search).options(handlers::preflight),
                "GET, POST, OPTIONS",
            ),
        )
        .route(
            "/api/suggest",
            with_cors(
                get(handlers::suggest).options(handlers::preflight),
                "GET, OPTIONS",
            ),
        )
        .route(
            "/api/engines",
            with_cors(
                get(handlers::engines).options(handlers::preflight),
                "GET, OPTIONS",
            ),
        )
        .route("/health", get(handlers::health))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}

/// Attach the permissive CORS header set to every response of a route
fn with_cors(route: MethodRouter<AppState>, methods: &'static str) -> MethodRouter<AppState> {
    let headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(methods),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    route.layer(headers)
}
