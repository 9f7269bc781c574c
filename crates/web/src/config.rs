use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Default backend base URL, including the `/api` prefix.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL; endpoints are appended verbatim.
    pub api_url: String,
    /// Where the bearer token is persisted. `None` keeps it in memory only.
    pub token_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_path: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `ARTISTSHUB_API_URL`    | `http://localhost:5000/api` |
    /// | `ARTISTSHUB_TOKEN_PATH` | unset (in-memory token)     |
    pub fn from_env() -> Self {
        let api_url = std::env::var("ARTISTSHUB_API_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token_path = std::env::var_os("ARTISTSHUB_TOKEN_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self {
            api_url,
            token_path,
        }
    }

    /// Open the token store this configuration asks for.
    pub fn token_store(&self) -> std::io::Result<Arc<dyn TokenStore>> {
        Ok(match &self.token_path {
            Some(path) => Arc::new(FileTokenStore::open(path.clone())?),
            None => Arc::new(MemoryTokenStore::default()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_local_backend_with_memory_tokens() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let store = config.token_store().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn token_path_selects_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            token_path: Some(dir.path().join("token")),
            ..Default::default()
        };

        config.token_store().unwrap().set("abc");
        assert_eq!(config.token_store().unwrap().get().as_deref(), Some("abc"));
    }
}
