//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep [`LibraryError`] HTTP-agnostic while giving every failed
//! request the same JSON envelope:
//!
//! ```json
//! {
//!   "timestamp": "2025-01-01T12:00:00.000Z",
//!   "status": 409,
//!   "error": "Conflict",
//!   "message": "Book 'Dune' is already checked out.",
//!   "path": "/api/library/checkoutBook"
//! }
//! ```

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use chrono::SecondsFormat;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{ErrorCode, LibraryError, TRACE_ID_HEADER, TraceId};

/// Prefix applied to messages of failures outside the lending taxonomy.
pub const UNEXPECTED_PREFIX: &str = "Unexpected error: ";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Instant the error was produced, RFC 3339 in UTC.
    #[schema(example = "2025-01-01T12:00:00.000Z", format = DateTime)]
    pub timestamp: String,
    /// Numeric HTTP status.
    #[schema(example = 404)]
    pub status: u16,
    /// Canonical reason phrase for `status`.
    #[schema(example = "Not Found")]
    pub error: String,
    #[schema(example = "User not found")]
    pub message: String,
    /// Request path without the query string.
    #[schema(example = "/api/library/checkoutBook")]
    pub path: String,
}

/// Error returned by HTTP handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn build(status: StatusCode, message: String, path: &str, clock: &dyn Clock) -> Self {
        Self {
            status,
            body: ErrorBody {
                timestamp: clock.utc().to_rfc3339_opts(SecondsFormat::Millis, true),
                status: status.as_u16(),
                error: status.canonical_reason().unwrap_or("Unknown").to_owned(),
                message,
                path: path.to_owned(),
            },
        }
    }

    /// Map a lending failure raised while serving `path`.
    pub fn from_library_error(error: &LibraryError, path: &str, clock: &dyn Clock) -> Self {
        let status = status_for(error.code());
        let message = match error.code() {
            ErrorCode::InternalError => {
                error!(%error, path, "unexpected failure while serving request");
                format!("{UNEXPECTED_PREFIX}{error}")
            }
            _ => error.to_string(),
        };
        Self::build(status, message, path, clock)
    }

    /// Catch-all for failures that never reached the lending service.
    pub fn unexpected(message: impl std::fmt::Display, path: &str, clock: &dyn Clock) -> Self {
        error!(%message, path, "unexpected failure while serving request");
        Self::build(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{UNEXPECTED_PREFIX}{message}"),
            path,
            clock,
        )
    }

    /// Convenience wrapper over [`Self::from_library_error`] for handlers.
    pub fn for_request(error: &LibraryError, req: &HttpRequest, clock: &dyn Clock) -> Self {
        Self::from_library_error(error, req.path(), clock)
    }

    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.body.status, self.body.message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status);
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }
        builder.json(&self.body)
    }
}
