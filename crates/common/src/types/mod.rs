use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain-text confirmation returned by the create endpoints.
pub const PRODUCT_ADDED: &str = "Product added";
pub const ORDER_CREATED: &str = "Order created";
