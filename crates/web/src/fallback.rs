//! Resilient reads: try the network, otherwise use bundled data.

use std::future::Future;

use crate::http::ApiError;

/// Where a loaded value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Network,
    Fallback,
}

/// A value produced by [`fetch_or`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    pub value: T,
    pub source: DataSource,
}

impl<T> Loaded<T> {
    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loaded<U> {
        Loaded {
            value: f(self.value),
            source: self.source,
        }
    }
}

/// Await `fetch`; if it fails or yields nothing usable (`Ok(None)`), return
/// `fallback()` instead.
///
/// Only for reads. Writes must surface their errors.
pub async fn fetch_or<T, Fut, F>(what: &str, fetch: Fut, fallback: F) -> Loaded<T>
where
    Fut: Future<Output = Result<Option<T>, ApiError>>,
    F: FnOnce() -> T,
{
    match fetch.await {
        Ok(Some(value)) => Loaded {
            value,
            source: DataSource::Network,
        },
        Ok(None) => {
            tracing::warn!(what, "Backend returned no data, using bundled data");
            Loaded {
                value: fallback(),
                source: DataSource::Fallback,
            }
        }
        Err(e) => {
            tracing::warn!(what, error = %e, "Failed to load from backend, using bundled data");
            Loaded {
                value: fallback(),
                source: DataSource::Fallback,
            }
        }
    }
}
