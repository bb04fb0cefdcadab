//! Local key-value persistence and the auth synchronizer.
//!
//! Exactly two keys are persisted: the bearer token and the serialized
//! user profile (`config::AUTH_TOKEN_KEY`, `config::USER_DATA_KEY`).
//! They are written together and cleared together; readers of the
//! store never observe a token without its matching profile slot.
//!
//! The store surface is deliberately infallible, like browser
//! localStorage: backends log IO failures and carry on, so the state
//! container never has to handle a persistence error.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::config;
use crate::state::AuthState;

/// Synchronous string storage collaborator.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

// ═══════════════════════════════════════════════════════════
// MemoryStore — tests and embedded use
// ═══════════════════════════════════════════════════════════

/// In-memory store. The default backend for tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.remove(key);
        }
    }
}

// ═══════════════════════════════════════════════════════════
// FileStore — one file per key under the app data dir
// ═══════════════════════════════════════════════════════════

/// File-backed store: each key is a file in `dir`.
///
/// Keys are fixed compile-time constants from `config`, never
/// user-supplied, so they are safe as file names.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the default `~/Carelog/storage` location.
    pub fn default_location() -> Self {
        Self::new(config::storage_dir())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::warn!(key, error = %e, "Failed to create storage directory");
            return;
        }
        if let Err(e) = fs::write(self.key_path(key), value) {
            tracing::warn!(key, error = %e, "Failed to persist key");
        }
    }

    fn remove(&self, key: &str) {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(key, error = %e, "Failed to remove key"),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Auth persistence synchronizer
// ═══════════════════════════════════════════════════════════

/// Bring the two persisted keys in line with the auth sub-tree.
///
/// Runs as a reaction after every dispatch that replaced `auth` —
/// never inside the reducer. Idempotent: re-running with the same
/// state rewrites the same values.
pub fn sync_auth(kv: &dyn KeyValueStore, auth: &AuthState) {
    match (&auth.token, auth.is_authenticated) {
        (Some(token), true) => {
            kv.set(config::AUTH_TOKEN_KEY, token);
            match &auth.user {
                Some(user) => match serde_json::to_string(user) {
                    Ok(json) => kv.set(config::USER_DATA_KEY, &json),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to serialize user profile")
                    }
                },
                // Profile not fetched yet; drop any stale cached one.
                None => kv.remove(config::USER_DATA_KEY),
            }
        }
        _ => {
            kv.remove(config::AUTH_TOKEN_KEY);
            kv.remove(config::USER_DATA_KEY);
        }
    }
}
