//! Process-wide authentication state.
//!
//! One [`Session`] is constructed per application instance and shared by
//! `Arc`. Observers follow changes through [`Session::subscribe`].

use artistshub_core::auth::{SignupRequest, UserInfo};
use tokio::sync::watch;

use crate::api::AuthApi;
use crate::http::ApiError;

/// Lifecycle of the session: `Initializing -> Authenticated | Anonymous`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The startup "who am I" check has not finished.
    Initializing,
    Authenticated(UserInfo),
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The request failed outright.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend answered but did not hand back a user.
    #[error("{0}")]
    Rejected(String),
}

impl SessionError {
    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            SessionError::Api(e) => e.message(),
            SessionError::Rejected(msg) => msg.clone(),
        }
    }
}

pub struct Session {
    auth: AuthApi,
    state: watch::Sender<SessionState>,
}

impl Session {
    /// Create a session in the `Initializing` state. Call [`Session::init`]
    /// once at startup.
    pub fn new(auth: AuthApi) -> Self {
        let (state, _) = watch::channel(SessionState::Initializing);
        Self { auth, state }
    }

    /// Verify a persisted token, if any, and settle the initial state.
    ///
    /// A token the backend does not accept is discarded.
    pub async fn init(&self) {
        if !self.auth.has_token() {
            self.state.send_replace(SessionState::Anonymous);
            return;
        }

        let user = match self.auth.current_user().await {
            Ok(envelope) if envelope.success => envelope.data.map(|d| d.user),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Session check failed, discarding token");
                None
            }
        };

        match user {
            Some(user) => {
                self.state.send_replace(SessionState::Authenticated(user));
            }
            None => {
                self.auth.logout();
                self.state.send_replace(SessionState::Anonymous);
            }
        }
    }

    /// Sign in. The state is only changed on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserInfo, SessionError> {
        let envelope = self.auth.login(email, password).await?;
        let user = match envelope.data {
            Some(payload) if envelope.success => payload.user,
            _ => {
                return Err(SessionError::Rejected(
                    envelope.message.unwrap_or_else(|| "Login failed".into()),
                ))
            }
        };
        self.state
            .send_replace(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Register and adopt the new account. The state is only changed on
    /// success.
    pub async fn signup(&self, request: &SignupRequest) -> Result<UserInfo, SessionError> {
        let envelope = self.auth.signup(request).await?;
        let user = match envelope.data {
            Some(payload) if envelope.success => payload.user,
            _ => {
                return Err(SessionError::Rejected(
                    envelope.message.unwrap_or_else(|| "Signup failed".into()),
                ))
            }
        };
        self.state
            .send_replace(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Clear the token and the user. No network call.
    pub fn logout(&self) {
        self.auth.logout();
        self.state.send_replace(SessionState::Anonymous);
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().user().is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.state.borrow(), SessionState::Initializing)
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}
