//! Persistent key-value storage, standing in for browser local storage.
//!
//! Two backends share the `KeyValueStore` trait:
//! - `MemoryStore`: in-process, gone when the process exits
//! - `FileStore`: a JSON object on disk, written through on every `set`

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

/// Key holding the saved role.
pub const ROLE_KEY: &str = "user_role";

/// Key holding the saved course context.
pub const CONTEXT_KEY: &str = "context_id";

/// Errors from store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access store at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Corrupt store at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// String-to-string storage with no expiry or namespacing.
///
/// Reads never fail; an unreadable entry is simply absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Set several keys together. Backends that can fail part-way override
    /// this so a failure leaves none of the entries written.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}
