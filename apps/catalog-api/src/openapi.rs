use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "A simple web service for an item catalog."
    ),
    nest(
        (path = "/items", api = domain_items::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
