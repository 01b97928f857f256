// Gateway Error Types
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub type GatewayResult<T> = Result<T, SearchError>;

/// Failures talking to the upstream knowledge service.
///
/// Messages carry internal detail (addresses, transport errors) and are only
/// meant for logs.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("knowledge service unreachable: {0}")]
    Unreachable(String),

    #[error("knowledge service timed out after {0:?}")]
    Timeout(Duration),

    #[error("knowledge service returned HTTP {0}")]
    Status(u16),

    #[error("malformed knowledge service payload: {0}")]
    Deserialization(String),
}

impl UpstreamError {
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout(timeout)
        } else if let Some(status) = err.status() {
            UpstreamError::Status(status.as_u16())
        } else {
            UpstreamError::Unreachable(err.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Query parameter cannot be empty")]
    InvalidQuery,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl SearchError {
    /// Message safe to hand to untrusted callers.
    pub fn public_message(&self) -> &'static str {
        match self {
            SearchError::InvalidQuery => "Query parameter cannot be empty",
            SearchError::Upstream(UpstreamError::Unreachable(_))
            | SearchError::Upstream(UpstreamError::Timeout(_)) => {
                "Connection to knowledge service failed"
            }
            SearchError::Upstream(_) => "Knowledge service returned an invalid response",
        }
    }
}

/// Body used for every non-2xx response, `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl ResponseError for SearchError {
    fn status_code(&self) -> StatusCode {
        match self {
            SearchError::InvalidQuery => StatusCode::BAD_REQUEST,
            SearchError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.public_message()))
    }
}
