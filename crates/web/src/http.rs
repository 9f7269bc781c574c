//! JSON REST client for the ArtistsHub backend.
//!
//! Wraps [`reqwest`] with bearer-token injection from a [`TokenStore`] and
//! folds every failure (transport, non-2xx status, undecodable body) into
//! [`ApiError`].

use std::sync::Arc;

use artistshub_core::envelope::Envelope;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::TokenStore;

/// Message used when a failed response carries no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors from the REST client layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend returned a non-2xx status.
    #[error("{message}")]
    Status {
        status: u16,
        /// Machine-readable error code from the envelope, if present.
        code: Option<String>,
        /// Server message, or [`GENERIC_ERROR_MESSAGE`].
        message: String,
    },

    /// A 2xx response whose body is not the expected envelope.
    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a server-side failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// HTTP client for the backend. Cheap to clone; clones share the connection
/// pool and the token store.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// * `base_url` - Backend URL including the `/api` prefix, e.g.
    ///   `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, tokens)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Envelope<T>, ApiError> {
        self.send(self.request(Method::GET, endpoint)).await
    }

    /// `GET` with URL-encoded query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Envelope<T>, ApiError> {
        let builder = self.request(Method::GET, endpoint);
        let builder = if query.is_empty() {
            builder
        } else {
            builder.query(query)
        };
        self.send(builder).await
    }

    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, endpoint).json(body))
            .await
    }

    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, endpoint).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Envelope<T>, ApiError> {
        self.send(self.request(Method::DELETE, endpoint)).await
    }

    // ---- private helpers ----

    /// Start a request to `base_url + endpoint`, attaching the bearer token
    /// when one is stored.
    fn request(&self, method: Method, endpoint: &str) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, endpoint));
        match self.tokens.get() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let response = builder.send().await.inspect_err(|e| {
            tracing::warn!(error = %e, "API request failed");
        })?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = status_error(status, &bytes);
            tracing::warn!(status = status.as_u16(), error = %err, "API returned an error");
            return Err(err);
        }

        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }
}

/// Build [`ApiError::Status`] from a failed response body, tolerating bodies
/// that are not envelopes.
fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let envelope = serde_json::from_slice::<Envelope<serde_json::Value>>(body).ok();
    let (code, message) = match envelope {
        Some(env) => (env.code, env.message.filter(|m| !m.is_empty())),
        None => (None, None),
    };
    ApiError::Status {
        status: status.as_u16(),
        code,
        message: message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
    }
}
