use std::{io::ErrorKind, path::{Path, PathBuf}};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::storage::state_store::{State, StateStore};

/// Flat JSON file holding the whole catalog.
///
/// Every `load` reads the file in full and every `save` rewrites it in full.
/// Nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Point the store at a path. Touches nothing on disk: the directory is
    /// expected to exist (see `common::env::ensure_data_dir`) and the file is
    /// only written by the first `save`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.file_path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> State {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "data file absent; using empty state");
                return State::default();
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "data file unreadable; using empty state");
                return State::default();
            }
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(path = %self.file_path.display(), error = %e, "data file corrupt; using empty state");
            State::default()
        })
    }

    async fn save(&self, state: &State) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(state).map_err(|e| ServiceError::Serialize(e.to_string()))?;
        // tmp + rename，避免读者看到写了一半的文件
        let tmp = self.tmp_path();
        fs::write(&tmp, data).await.map_err(|e| ServiceError::storage(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.file_path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(ServiceError::storage(&self.file_path, e));
        }
        Ok(())
    }
}
