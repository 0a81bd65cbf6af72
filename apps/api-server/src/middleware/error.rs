//! Error handling - maps internal failures to the wire contract.

use std::fmt;
use std::time::Duration;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use kenteken_core::SourceError;
use kenteken_shared::ErrorBody;

/// Application-level error type. Every variant converts to an
/// `{ "error": ... }` body with a Dutch user-facing message; internal
/// detail is logged, never sent to the caller.
#[derive(Debug)]
pub enum AppError {
    /// The plate failed validation. User fixable, terminal.
    InvalidPlate,
    /// The client exhausted its quota for the current window.
    RateLimited { retry_after: Duration },
    /// Upstream answered, but the payload did not match its schema.
    BadUpstreamData(String),
    /// Upstream signalled it is unavailable.
    UpstreamUnavailable,
    /// Unclassified failure.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidPlate => write!(f, "invalid plate format"),
            AppError::RateLimited { retry_after } => {
                write!(f, "rate limited, retry after {}s", retry_after.as_secs())
            }
            AppError::BadUpstreamData(detail) => write!(f, "bad upstream data: {detail}"),
            AppError::UpstreamUnavailable => write!(f, "upstream unavailable"),
            AppError::Internal(detail) => write!(f, "internal error: {detail}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPlate => StatusCode::BAD_REQUEST,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::BadUpstreamData(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::InvalidPlate => {
                HttpResponse::BadRequest().json(ErrorBody::invalid_plate())
            }
            AppError::RateLimited { retry_after } => HttpResponse::TooManyRequests()
                .insert_header(("Retry-After", retry_after.as_secs().to_string()))
                .json(ErrorBody::too_many_requests()),
            AppError::BadUpstreamData(detail) => {
                tracing::error!(detail = %detail, "RDW payload failed validation");
                HttpResponse::BadGateway().json(ErrorBody::bad_upstream_data())
            }
            AppError::UpstreamUnavailable => {
                tracing::warn!("RDW API unavailable");
                HttpResponse::ServiceUnavailable().json(ErrorBody::upstream_unavailable())
            }
            AppError::Internal(detail) => {
                tracing::error!(detail = %detail, "vehicle lookup failed");
                HttpResponse::InternalServerError().json(ErrorBody::internal())
            }
        }
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        if err.is_unavailable() {
            return AppError::UpstreamUnavailable;
        }
        match err {
            SourceError::Schema(detail) => AppError::BadUpstreamData(detail),
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_errors_map_to_the_contract_statuses() {
        let unavailable: AppError = SourceError::Upstream { status: 503 }.into();
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let schema: AppError = SourceError::Schema("bad".into()).into();
        assert_eq!(schema.status_code(), StatusCode::BAD_GATEWAY);

        let other: AppError = SourceError::Upstream { status: 500 }.into();
        assert_eq!(other.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let transport: AppError = SourceError::Transport("timeout".into()).into();
        assert_eq!(transport.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
