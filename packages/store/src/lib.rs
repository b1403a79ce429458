//! Session persistence and client configuration for TaskDeck.
//!
//! Everything the client keeps between runs is a handful of string values
//! (the bearer token and a JSON snapshot of the signed-in user). They are
//! written through the [`KeyValueStore`] trait so the same session logic runs
//! against browser storage on the web, plain files on desktop, and memory in
//! tests.

pub mod config;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::{BrowserStore, StorageScope};

pub use config::ClientConfig;

/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Key holding the JSON-encoded signed-in user.
pub const USER_KEY: &str = "user";

/// Synchronous string key/value storage.
///
/// Implementations never fail loudly: a read that cannot be served returns
/// `None` and a write that cannot be performed is dropped. A broken store
/// therefore looks like an empty one, which the session layer treats as
/// "signed out".
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
