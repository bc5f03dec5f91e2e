use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ServiceError;

/// The persisted aggregate: every product and every order, in insertion order.
///
/// Entries are opaque JSON documents; their identity is their index.
/// Both sequences are always present, a document missing either one loads it empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub products: Vec<Value>,
    #[serde(default)]
    pub orders: Vec<Value>,
}

/// Which sequence of the aggregate an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    Products,
    Orders,
}

impl Resource {
    pub fn name(self) -> &'static str {
        match self {
            Resource::Products => "products",
            Resource::Orders => "orders",
        }
    }

    pub fn items_mut(self, state: &mut State) -> &mut Vec<Value> {
        match self {
            Resource::Products => &mut state.products,
            Resource::Orders => &mut state.orders,
        }
    }
}

/// Trait abstraction for whole-aggregate storage.
/// Implementations can be file-backed, in-memory, or a database.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the full state. Never fails: unreadable storage yields `State::default()`.
    async fn load(&self) -> State;
    /// Overwrite the full persisted state.
    async fn save(&self, state: &State) -> Result<(), ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_deserialize_empty() {
        let s: State = serde_json::from_value(json!({"products": [{"a": 1}]})).expect("parse");
        assert_eq!(s.products, vec![json!({"a": 1})]);
        assert!(s.orders.is_empty());

        let s: State = serde_json::from_value(json!({})).expect("parse");
        assert_eq!(s, State::default());
    }

    #[test]
    fn resource_selects_its_sequence() {
        let mut s = State::default();
        Resource::Orders.items_mut(&mut s).push(json!("o"));
        assert!(s.products.is_empty());
        assert_eq!(s.orders, vec![json!("o")]);
        assert_eq!(Resource::Products.name(), "products");
        assert_eq!(Resource::Orders.name(), "orders");
    }
}
