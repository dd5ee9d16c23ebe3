//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "1.0.0",
        description = "A simple REST API for managing items"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(crate::api::root),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Item management endpoints"),
        (name = "Root", description = "Service entry point")
    )
)]
pub struct ApiDoc;
