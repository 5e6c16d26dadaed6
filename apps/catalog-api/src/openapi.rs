//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clothing Store Catalog API",
        version = "1.0.0",
        description = "REST API for managing clothing store inventory"
    ),
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;
