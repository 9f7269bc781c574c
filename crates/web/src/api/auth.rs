//! Client for the `/auth` resource.

use artistshub_core::auth::{AuthPayload, LoginRequest, MePayload, SignupRequest};
use artistshub_core::envelope::Envelope;

use crate::http::{ApiClient, ApiError};

#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register an account. A returned token is persisted before this returns.
    pub async fn signup(
        &self,
        request: &SignupRequest,
    ) -> Result<Envelope<AuthPayload>, ApiError> {
        let envelope = self.client.post("/auth/signup", request).await?;
        self.store_token(&envelope);
        Ok(envelope)
    }

    /// Sign in. A returned token is persisted before this returns.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Envelope<AuthPayload>, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let envelope = self.client.post("/auth/login", &body).await?;
        self.store_token(&envelope);
        Ok(envelope)
    }

    /// `GET /auth/me` for the stored token.
    pub async fn current_user(&self) -> Result<Envelope<MePayload>, ApiError> {
        self.client.get("/auth/me").await
    }

    /// Forget the stored token. No network call.
    pub fn logout(&self) {
        self.client.tokens().clear();
    }

    pub fn has_token(&self) -> bool {
        self.client.tokens().get().is_some()
    }

    fn store_token(&self, envelope: &Envelope<AuthPayload>) {
        let token = envelope
            .data
            .as_ref()
            .and_then(|d| d.token.as_deref())
            .filter(|t| !t.is_empty());
        if let Some(token) = token {
            self.client.tokens().set(token);
        }
    }
}
