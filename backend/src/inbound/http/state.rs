//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the [`LibraryCommand`] driving port and a clock, and remain testable
//! without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::LibraryCommand;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub library: Arc<dyn LibraryCommand>,
    /// Source of error-body timestamps.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Construct state from the lending port and a clock.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use library_backend::domain::LibraryService;
    /// use library_backend::inbound::http::state::HttpState;
    /// use library_backend::outbound::persistence::{
    ///     DbPool, DieselBookRepository, DieselUserRepository,
    /// };
    ///
    /// fn build(pool: DbPool) -> HttpState {
    ///     let service = LibraryService::new(
    ///         Arc::new(DieselBookRepository::new(pool.clone())),
    ///         Arc::new(DieselUserRepository::new(pool)),
    ///     );
    ///     HttpState::new(Arc::new(service), Arc::new(mockable::DefaultClock))
    /// }
    /// ```
    pub fn new(library: Arc<dyn LibraryCommand>, clock: Arc<dyn Clock>) -> Self {
        Self { library, clock }
    }
}
