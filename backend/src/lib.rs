//! Library lending backend.
//!
//! Members check books out of, and return books to, a shared catalogue over
//! HTTP. The crate is laid out hexagonally: [`domain`] holds the lending
//! rules and ports, [`inbound`] adapts HTTP onto them, and [`outbound`]
//! implements the ports against PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
