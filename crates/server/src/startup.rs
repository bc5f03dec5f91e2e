use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::{storage::JsonFileStore, Catalog};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("{}: {e}", cfg.bind_addr())))
}

/// Wire the file-backed catalog into a router.
pub fn build_app(cfg: &AppConfig) -> Router {
    let store = JsonFileStore::new(cfg.storage.data_file.clone());
    let state = ServerState { catalog: Catalog::new(Arc::new(store)) };
    routes::build_router(state, build_cors())
}

/// Resolve on Ctrl+C so in-flight requests can finish.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_data_dir(&cfg.storage.data_file)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let app = build_app(&cfg);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, data_file = %cfg.storage.data_file.display(), "catalog API listening on http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_host_is_invalid_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn default_addr_parses() {
        let addr = bind_addr(&AppConfig::default()).expect("addr");
        assert_eq!(addr.port(), configs::DEFAULT_PORT);
    }

    #[tokio::test]
    async fn uncreatable_data_dir_fails_startup() -> anyhow::Result<()> {
        let blocker = std::env::temp_dir().join(format!("startup_blocker_{}", uuid::Uuid::new_v4()));
        tokio::fs::write(&blocker, b"").await?;
        let mut cfg = AppConfig::default();
        cfg.storage.data_file = blocker.join("nested").join("data.json");

        let err = run(cfg).await.expect_err("startup must fail");
        assert!(matches!(err.downcast_ref::<StartupError>(), Some(StartupError::Runtime(_))));

        let _ = tokio::fs::remove_file(&blocker).await;
        Ok(())
    }
}
