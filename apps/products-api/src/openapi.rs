//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::health::StatusMessage;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Product inventory REST API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(crate::api::health::liveness),
    components(schemas(StatusMessage)),
    nest(
        (path = "/api/products", api = domain_products::handlers::ApiDoc)
    ),
    tags(
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
