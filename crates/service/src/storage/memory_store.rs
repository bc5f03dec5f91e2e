use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::storage::state_store::{State, StateStore};

/// In-memory store. Holds a snapshot; `load` hands out copies, `save` replaces it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<State>,
}

impl MemoryStore {
    pub fn new(initial: State) -> Self {
        Self { inner: RwLock::new(initial) }
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self) -> State {
        self.inner.read().await.clone()
    }

    async fn save(&self, state: &State) -> Result<(), ServiceError> {
        *self.inner.write().await = state.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn starts_empty_and_round_trips() -> Result<(), anyhow::Error> {
        let store = MemoryStore::default();
        assert_eq!(store.load().await, State::default());

        let state = State { products: vec![json!({"sku": "A"})], orders: vec![json!(1)] };
        store.save(&state).await?;
        assert_eq!(store.load().await, state);
        Ok(())
    }

    #[tokio::test]
    async fn loaded_copy_is_detached() {
        let store = MemoryStore::new(State { products: vec![json!(1)], orders: vec![] });
        let mut copy = store.load().await;
        copy.products.push(json!(2));
        assert_eq!(store.load().await.products, vec![json!(1)]);
    }
}
