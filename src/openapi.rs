//! OpenAPI document for the product API, served at `/api-docs/openapi.json`.

use crate::api::models::products::{MessageResponse, ProductCreate, ProductResponse};
use crate::errors::ErrorResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "shelfd",
        description = "A small product catalog backend with an embedded static frontend"
    ),
    paths(
        crate::api::handlers::products::list_products,
        crate::api::handlers::products::create_product,
        crate::api::handlers::products::delete_product,
    ),
    components(schemas(ProductCreate, ProductResponse, MessageResponse, ErrorResponse)),
    tags(
        (name = "products", description = "Product catalog operations")
    )
)]
pub struct ApiDoc;
