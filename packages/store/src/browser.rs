//! # Browser storage: web platform persistence
//!
//! [`BrowserStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! writes through to either `window.localStorage` (survives reloads and new
//! tabs) or `window.sessionStorage` (scoped to the tab) via [`web_sys`].
//!
//! The struct only remembers which storage area it targets and looks the
//! `Storage` object up on every call, so it stays `Send + Sync` and cheap to
//! clone. When storage is unavailable (private browsing, disabled cookies) every
//! read returns `None` and every write is dropped.

use crate::KeyValueStore;

/// Which browser storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageScope {
    /// `window.localStorage`
    Local,
    /// `window.sessionStorage`
    Session,
}

/// `localStorage`/`sessionStorage`-backed store for the web platform.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStore {
    scope: StorageScope,
}

impl BrowserStore {
    pub fn local() -> Self {
        Self {
            scope: StorageScope::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            scope: StorageScope::Session,
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.scope {
            StorageScope::Local => window.local_storage(),
            StorageScope::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
