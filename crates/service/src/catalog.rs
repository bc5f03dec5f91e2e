use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::state_store::{Resource, StateStore};

/// Products and orders on top of a `StateStore`.
///
/// Reads go straight to the store. Appends run load → push → save while holding
/// `write_lock`, so concurrent appends in this process cannot drop each other.
/// Separate processes sharing one data file are not coordinated.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn StateStore>,
    write_lock: Arc<Mutex<()>>,
}

impl Catalog {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store, write_lock: Arc::new(Mutex::new(())) }
    }

    /// Every entry of `resource`, in stored order.
    pub async fn list(&self, resource: Resource) -> Vec<Value> {
        let mut state = self.store.load().await;
        std::mem::take(resource.items_mut(&mut state))
    }

    /// Append `value` to `resource` and persist. Returns the entry's index.
    pub async fn append(&self, resource: Resource, value: Value) -> Result<usize, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut state = self.store.load().await;
        let items = resource.items_mut(&mut state);
        items.push(value);
        let index = items.len() - 1;
        self.store.save(&state).await?;
        info!(resource = resource.name(), index, "entry appended");
        Ok(index)
    }
}
