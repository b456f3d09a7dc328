use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the catalog API.
///
/// Domain docs are nested under the same paths the router mounts them on.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        description = "Record management service for catalog items"
    ),
    nest(
        (path = "/api/items", api = domain_items::ApiDoc)
    )
)]
pub struct ApiDoc;
