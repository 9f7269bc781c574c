//! Client-side persisted token storage.
//!
//! The token is the only thing the client persists. Reads never fail: an
//! unreadable or empty store simply has no token.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Storage for the bearer token.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any. Empty tokens count as absent.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token held in process memory only.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Token persisted to a file so it survives restarts.
///
/// The in-memory copy is authoritative for the running process; failed disk
/// writes are logged and otherwise ignored.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cached: MemoryTokenStore,
}

impl FileTokenStore {
    /// Open the store, loading a previously persisted token if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let cached = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    MemoryTokenStore::default()
                } else {
                    MemoryTokenStore::with_token(token)
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => MemoryTokenStore::default(),
            Err(e) => return Err(e),
        };
        Ok(Self { path, cached })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.cached.get()
    }

    fn set(&self, token: &str) {
        self.cached.set(token);
        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist token");
        }
    }

    fn clear(&self) {
        self.cached.clear();
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove token file");
            }
        }
    }
}
