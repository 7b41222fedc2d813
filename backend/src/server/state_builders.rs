//! Builders for the HTTP handler state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use library_backend::domain::LibraryService;
use library_backend::domain::ports::{BookRepository, LibraryCommand, UserRepository};
use library_backend::inbound::http::state::HttpState;
use library_backend::outbound::persistence::{DbPool, DieselBookRepository, DieselUserRepository};

/// Wire the lending service over arbitrary repository adapters.
fn build_library_state<B, U>(
    books: Arc<B>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
) -> web::Data<HttpState>
where
    B: BookRepository + 'static,
    U: UserRepository + 'static,
{
    let library: Arc<dyn LibraryCommand> = Arc::new(LibraryService::new(books, users));
    web::Data::new(HttpState::new(library, clock))
}

/// Build the shared HTTP state backed by the PostgreSQL adapters.
pub(super) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    build_library_state(
        Arc::new(DieselBookRepository::new(pool.clone())),
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DefaultClock),
    )
}
