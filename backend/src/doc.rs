//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the lending endpoints, the health probes and the
//! [`ErrorBody`] envelope returned on failure. The document is served by
//! Swagger UI in debug builds and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library backend API",
        description = "Check books out of and return books to the library catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::library::checkout_book,
        crate::inbound::http::library::return_book,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorBody)),
    tags(
        (name = "library", description = "Book lending operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
