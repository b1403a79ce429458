//! # Filesystem-backed key/value store
//!
//! [`FileStore`] persists each key as its own file under a base directory. It is
//! the desktop counterpart of the browser's `localStorage`: the signed-in user
//! and token survive an application restart.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token      # bearer token
//! └── user       # JSON-encoded user snapshot
//! ```
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/taskdeck/` |
//! | Linux | `~/.local/share/taskdeck/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\taskdeck\` |
//!
//! Keys are sanitised to a single path component, so a key can never escape
//! the base directory.

use std::path::PathBuf;

use crate::KeyValueStore;

/// Filesystem-backed store for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}
