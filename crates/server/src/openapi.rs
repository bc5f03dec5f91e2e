use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Typical product shape. Not enforced: any JSON value is stored as submitted.
#[derive(ToSchema)]
pub struct ProductDoc { pub name: String, pub price: f64 }

/// Typical order shape. Not enforced: any JSON value is stored as submitted.
#[derive(ToSchema)]
pub struct OrderDoc {
    #[schema(rename = "productIndex")]
    pub product_index: usize,
    pub qty: u32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::catalog::list_products,
        crate::routes::catalog::create_product,
        crate::routes::catalog::list_orders,
        crate::routes::catalog::create_order,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            OrderDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "orders")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_all_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("serialize openapi");
        let paths = doc["paths"].as_object().expect("paths");
        for p in ["/health", "/products", "/orders"] {
            assert!(paths.contains_key(p), "missing {p}");
        }
        assert!(doc["paths"]["/products"]["post"].is_object());
        assert!(doc["paths"]["/orders"]["get"].is_object());
    }
}
