//! Platform wiring for the session layer.
//!
//! Builds the [`SessionManager`] the providers use, with storage and
//! configuration appropriate to the target:
//! - **Web** (WASM + `web` feature): token in `sessionStorage`, the persisted
//!   snapshot in `localStorage`, backend URL compiled in from
//!   `TASKDECK_API_URL` or the default.
//! - **Desktop** (native): token in memory for the run, the persisted snapshot
//!   as files under `<data_dir>/taskdeck/session/`, backend URL from
//!   `<config_dir>/taskdeck/taskdeck.toml` with `TASKDECK_API_URL` (or `.env`)
//!   taking precedence.

use std::sync::Arc;

use api::{ApiClient, SessionManager};
use store::{ClientConfig, KeyValueStore};

/// Create the session manager, installing `on_auth_failure` on its client.
pub fn connect(on_auth_failure: impl Fn() + Send + Sync + 'static) -> SessionManager {
    let config = load_config();
    let (session, persisted) = stores();
    tracing::info!(base_url = %config.api.base_url, "connecting to backend");
    let client = ApiClient::from_config(&config, session).with_auth_failure_hook(on_auth_failure);
    SessionManager::new(client, persisted)
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn load_config() -> ClientConfig {
    ClientConfig::default().with_override(option_env!("TASKDECK_API_URL").map(String::from))
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn stores() -> (Arc<dyn KeyValueStore>, Arc<dyn KeyValueStore>) {
    (
        Arc::new(store::BrowserStore::session()),
        Arc::new(store::BrowserStore::local()),
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> ClientConfig {
    dotenvy::dotenv().ok();

    let path = dirs::config_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("taskdeck")
        .join(ClientConfig::filename());
    let config = match std::fs::read_to_string(&path) {
        Ok(text) => ClientConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("ignoring invalid {}: {e}", path.display());
            ClientConfig::default()
        }),
        Err(_) => ClientConfig::default(),
    };
    config.with_override(std::env::var(store::config::API_URL_ENV).ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn stores() -> (Arc<dyn KeyValueStore>, Arc<dyn KeyValueStore>) {
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("taskdeck")
        .join("session");
    (
        Arc::new(store::MemoryStore::new()),
        Arc::new(store::FileStore::new(base)),
    )
}

// WASM without browser storage: nothing survives a reload.
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn load_config() -> ClientConfig {
    ClientConfig::default()
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn stores() -> (Arc<dyn KeyValueStore>, Arc<dyn KeyValueStore>) {
    (
        Arc::new(store::MemoryStore::new()),
        Arc::new(store::MemoryStore::new()),
    )
}
