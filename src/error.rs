//! Error types for the upstream proxy

use thiserror::Error;

/// Result type alias for proxy operations
pub type ProxyResult<T> = std::result::Result<T, ProxyError>;

/// Every failure a request can end in
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProxyError {
    /// The caller sent an unusable request
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The upstream call did not finish before its deadline
    #[error("Upstream request timed out")]
    RequestTimeout,

    /// The upstream answered with a non-2xx status
    #[error("HTTP {status}: {reason}")]
    UpstreamUnavailable { status: u16, reason: String },

    /// The upstream could not be reached at all
    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    /// Anything else, including undecodable upstream bodies
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    pub fn upstream_status(status: reqwest::StatusCode) -> Self {
        ProxyError::UpstreamUnavailable {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ProxyError::RequestTimeout
        } else {
            ProxyError::UpstreamUnreachable(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(error: serde_json::Error) -> Self {
        ProxyError::Internal(format!("JSON parsing failed: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_display() {
        let err = ProxyError::upstream_status(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_json_error_is_internal() {
        let err: ProxyError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ProxyError::Internal(_)));
    }
}
