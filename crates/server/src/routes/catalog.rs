use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde_json::Value;

use common::types::{ORDER_CREATED, PRODUCT_ADDED};
use service::Resource;

use crate::errors::ApiError;
use crate::routes::ServerState;

async fn list(state: &ServerState, resource: Resource) -> Json<Vec<Value>> {
    Json(state.catalog.list(resource).await)
}

async fn create(
    state: &ServerState,
    resource: Resource,
    payload: Result<Json<Value>, JsonRejection>,
    confirmation: &'static str,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(value) = payload?;
    if !(value.is_object() || value.is_array()) {
        return Err(ApiError::BadRequest("expected a JSON object or array".into()));
    }
    state.catalog.append(resource, value).await?;
    Ok((StatusCode::CREATED, confirmation))
}

/// List every product in insertion order.
#[utoipa::path(get, path = "/products", tag = "products", responses((status = 200, description = "All products in insertion order", body = [crate::openapi::ProductDoc])))]
pub async fn list_products(State(state): State<ServerState>) -> Json<Vec<Value>> {
    list(&state, Resource::Products).await
}

/// Append one product. Any JSON object or array is stored as-is.
#[utoipa::path(post, path = "/products", tag = "products", request_body = crate::openapi::ProductDoc, responses((status = 201, description = "Product added"), (status = 400, description = "Body is not a JSON object or array"), (status = 500, description = "Storage write failed")))]
pub async fn create_product(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    create(&state, Resource::Products, payload, PRODUCT_ADDED).await
}

/// List every order in insertion order.
#[utoipa::path(get, path = "/orders", tag = "orders", responses((status = 200, description = "All orders in insertion order", body = [crate::openapi::OrderDoc])))]
pub async fn list_orders(State(state): State<ServerState>) -> Json<Vec<Value>> {
    list(&state, Resource::Orders).await
}

/// Append one order. Any JSON object or array is stored as-is.
#[utoipa::path(post, path = "/orders", tag = "orders", request_body = crate::openapi::OrderDoc, responses((status = 201, description = "Order created"), (status = 400, description = "Body is not a JSON object or array"), (status = 500, description = "Storage write failed")))]
pub async fn create_order(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    create(&state, Resource::Orders, payload, ORDER_CREATED).await
}
