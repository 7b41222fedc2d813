//! Lending HTTP handlers.
//!
//! ```text
//! POST /api/library/checkoutBook?userId={id}&bookId={id}
//! POST /api/library/returnBook?userId={id}&bookId={id}
//! ```
//!
//! Successful calls answer `200 text/plain` with the receipt message.

use actix_web::error::QueryPayloadError;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, post, web};
use mockable::DefaultClock;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::ports::TransitionReceipt;
use crate::domain::{BookId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ApiError, ErrorBody};
use crate::inbound::http::state::HttpState;

/// Path prefix the lending handlers are mounted under.
pub const LIBRARY_SCOPE: &str = "/api/library";

/// Query parameters shared by both transitions.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TransitionQuery {
    /// Member performing the transition.
    pub user_id: i64,
    /// Book being checked out or returned.
    pub book_id: i64,
}

impl TransitionQuery {
    fn ids(self) -> (UserId, BookId) {
        (UserId::new(self.user_id), BookId::new(self.book_id))
    }
}

/// Turn query binding failures into the catch-all error envelope.
///
/// Missing or non-numeric identifiers never reach the lending service; they
/// surface as `500 Unexpected error: ...`.
pub fn query_error_handler(error: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(%error, path = req.path(), "query binding failed");
    let api_error = match req.app_data::<web::Data<HttpState>>() {
        Some(state) => ApiError::unexpected(&error, req.path(), state.clock.as_ref()),
        None => ApiError::unexpected(&error, req.path(), &DefaultClock),
    };
    api_error.into()
}

/// Query extractor configuration wiring [`query_error_handler`].
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

fn receipt_response(receipt: &TransitionReceipt) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(receipt.message())
}

/// Lend a book to a member.
#[utoipa::path(
    post,
    path = "/api/library/checkoutBook",
    params(TransitionQuery),
    responses(
        (status = 200, description = "Book checked out", body = String, content_type = "text/plain"),
        (status = 404, description = "User or book not found", body = ErrorBody),
        (status = 409, description = "Book already checked out", body = ErrorBody),
        (status = 500, description = "Unexpected error", body = ErrorBody)
    ),
    tags = ["library"],
    operation_id = "checkoutBook"
)]
#[post("/checkoutBook")]
pub async fn checkout_book(
    req: HttpRequest,
    state: web::Data<HttpState>,
    query: web::Query<TransitionQuery>,
) -> ApiResult<HttpResponse> {
    let (user_id, book_id) = query.into_inner().ids();
    let receipt = state
        .library
        .checkout_book(user_id, book_id)
        .await
        .map_err(|err| ApiError::for_request(&err, &req, state.clock.as_ref()))?;
    Ok(receipt_response(&receipt))
}

/// Take a book back from the member holding it.
#[utoipa::path(
    post,
    path = "/api/library/returnBook",
    params(TransitionQuery),
    responses(
        (status = 200, description = "Book returned", body = String, content_type = "text/plain"),
        (status = 400, description = "Caller does not hold the book", body = ErrorBody),
        (status = 404, description = "Book not found", body = ErrorBody),
        (status = 500, description = "Unexpected error", body = ErrorBody)
    ),
    tags = ["library"],
    operation_id = "returnBook"
)]
#[post("/returnBook")]
pub async fn return_book(
    req: HttpRequest,
    state: web::Data<HttpState>,
    query: web::Query<TransitionQuery>,
) -> ApiResult<HttpResponse> {
    let (user_id, book_id) = query.into_inner().ids();
    let receipt = state
        .library
        .return_book(user_id, book_id)
        .await
        .map_err(|err| ApiError::for_request(&err, &req, state.clock.as_ref()))?;
    Ok(receipt_response(&receipt))
}

/// Mount the lending handlers and their query configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use library_backend::inbound::http::library::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(LIBRARY_SCOPE)
            .app_data(query_config())
            .service(checkout_book)
            .service(return_book),
    );
}

#[cfg(test)]
#[path = "library_tests.rs"]
mod tests;
