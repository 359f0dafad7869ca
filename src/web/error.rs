//! Mapping of proxy failures onto JSON error responses

use crate::error::ProxyError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Which route a failure happened on; decides the wording of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Search,
    Suggest,
    Engines,
}

impl Service {
    fn label(self) -> (&'static str, &'static str) {
        match self {
            Service::Search => ("Search", "search"),
            Service::Suggest => ("Suggestion", "suggestion"),
            Service::Engines => ("Engines", "engines"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A [`ProxyError`] bound to the route it occurred on
#[derive(Debug)]
pub struct ApiError {
    pub service: Service,
    pub error: ProxyError,
}

impl ApiError {
    pub fn new(service: Service, error: ProxyError) -> Self {
        Self { service, error }
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            ProxyError::Validation(_) => StatusCode::BAD_REQUEST,
            ProxyError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            ProxyError::UpstreamUnavailable { .. } | ProxyError::UpstreamUnreachable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let (title, noun) = self.service.label();
        let (error, details) = match &self.error {
            ProxyError::Validation(message) => (message.clone(), None),
            ProxyError::RequestTimeout => (format!("{title} request timed out"), None),
            err @ ProxyError::UpstreamUnavailable { .. } => (
                format!("{title} service temporarily unavailable"),
                Some(err.to_string()),
            ),
            ProxyError::UpstreamUnreachable(cause) => (
                format!("Unable to connect to {noun} service"),
                Some(cause.clone()),
            ),
            ProxyError::Internal(_) => ("Internal server error".to_string(), None),
        };
        ErrorBody { error, details }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.error {
            ProxyError::Internal(cause) => tracing::error!("{:?} API error: {}", self.service, cause),
            ProxyError::Validation(_) => tracing::debug!("{:?} API rejected: {}", self.service, self.error),
            other => tracing::warn!("{:?} API upstream failure: {}", self.service, other),
        }
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_messages() {
        let timeout = ApiError::new(Service::Search, ProxyError::RequestTimeout);
        assert_eq!(timeout.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(timeout.body().error, "Search request timed out");

        let down = ApiError::new(
            Service::Search,
            ProxyError::UpstreamUnavailable {
                status: 500,
                reason: "Internal Server Error".into(),
            },
        );
        assert_eq!(down.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = down.body();
        assert_eq!(body.error, "Search service temporarily unavailable");
        assert_eq!(body.details.as_deref(), Some("HTTP 500: Internal Server Error"));
    }

    #[test]
    fn test_suggest_messages() {
        let unreachable = ApiError::new(
            Service::Suggest,
            ProxyError::UpstreamUnreachable("connection refused".into()),
        );
        assert_eq!(unreachable.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            unreachable.body().error,
            "Unable to connect to suggestion service"
        );
        assert_eq!(
            ApiError::new(Service::Suggest, ProxyError::RequestTimeout).body().error,
            "Suggestion request timed out"
        );
    }

    #[test]
    fn test_internal_hides_cause() {
        let err = ApiError::new(Service::Engines, ProxyError::Internal("boom".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = err.body();
        assert_eq!(body.error, "Internal server error");
        assert!(body.details.is_none());
    }
}
