//! # Store Providers
//!
//! The accessor never touches the process environment directly; it reads
//! through an injected [`EnvProvider`]. Production code binds [`ProcessEnv`],
//! tests bind [`MapEnv`].
//!
//! Every `get` is a live read against the current store state. Providers do
//! not cache, so external mutation of the store is visible on the very next
//! call.

use std::collections::HashMap;
use std::env;

/// Store read error.
///
/// Raised by a provider while accessing the ambient store. The accessor
/// swallows it at the point of access and degrades to "absent"; it never
/// reaches accessor callers.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("value for key {key} is not valid unicode")]
    NotUnicode { key: String },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Read-only view of the ambient key/value store.
pub trait EnvProvider: Send + Sync {
    /// Live read of a single key. `Ok(None)` when the key is not set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Every key currently set, in the store's own enumeration order.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// The real process environment.
///
/// Reads go straight to `std::env` on every call; no snapshot is taken at
/// construction time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                Err(StoreError::NotUnicode { key: key.to_string() })
            }
        }
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        // Keys with non-unicode names cannot be looked up through `get`
        // anyway, so they are skipped rather than faulted on.
        Ok(env::vars_os()
            .filter_map(|(key, _)| key.into_string().ok())
            .collect())
    }
}

/// In-memory provider for tests and embedded use.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl FromIterator<(String, String)> for MapEnv {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self { vars: HashMap::from_iter(iter) }
    }
}

impl EnvProvider for MapEnv {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.vars.get(key).cloned())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.vars.keys().cloned().collect())
    }
}
