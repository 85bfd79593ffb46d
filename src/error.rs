use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to callers of the local API.
///
/// Every variant renders as `{"detail": ...}` with the matching status.
#[derive(Debug, Display)]
pub enum ApiError {
    /// The remote store answered with a non-success status.
    #[display(fmt = "upstream returned {}: {}", status, body)]
    Upstream { status: u16, body: String },

    /// The remote store could not be reached or timed out.
    #[display(fmt = "{}", _0)]
    Connection(String),

    #[display(fmt = "{}", _0)]
    Internal(String),
}

impl ApiError {
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Upstream { body, .. } => body,
            ApiError::Connection(msg) | ApiError::Internal(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() || e.is_request() {
            ApiError::Connection(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Connection(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected upstream");
        }

        HttpResponse::build(status).json(json!({ "detail": self.detail() }))
    }
}
