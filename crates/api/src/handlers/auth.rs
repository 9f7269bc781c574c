//! Handlers for the `/auth` resource (signup, login, me).

use artistshub_core::auth::{AuthPayload, LoginRequest, MePayload, SignupForm, SignupRequest};
use artistshub_core::error::CoreError;
use artistshub_core::roles::Role;
use artistshub_core::validation::normalize_email;
use artistshub_db::models::user::{CreateUser, User};
use artistshub_db::repositories::UserRepo;
use axum::extract::State;
use axum::Json;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::{created, ApiResponse, ApiResponseWithStatus, Envelope};
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// POST /api/auth/signup
///
/// Register a creator (with password) or a client (intake only). Creators
/// receive a token; clients get `token: null` and can never sign in.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(form): AppJson<SignupForm>,
) -> AppResult<ApiResponseWithStatus<AuthPayload>> {
    // 1. Validate everything before touching the database.
    let request = form.validate()?;
    let role = request.role();

    // 2. Build the insert; only creators carry a password hash.
    let input = match request {
        SignupRequest::Creator(c) => {
            let password_hash = hash_password(&c.password)
                .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
            CreateUser {
                name: c.name,
                email: c.email,
                password_hash: Some(password_hash),
                role,
                profession: c.profession,
                portfolio_url: None,
                project_brief: None,
            }
        }
        SignupRequest::Client(c) => CreateUser {
            name: c.name,
            email: c.email,
            password_hash: None,
            role,
            profession: c.profession,
            portfolio_url: c.portfolio_url,
            project_brief: c.project_brief,
        },
    };

    // 3. The unique index on email decides duplicates.
    let user = UserRepo::create(&state.pool, &input)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "User already exists with this email"))?;

    let token = issue_token(&state, &user)?;

    tracing::info!(user_id = user.id, role = %user.role, "User signed up");

    Ok(created(Envelope::ok_with_message(
        "Account created successfully",
        AuthPayload {
            user: user.info(),
            token,
        },
    )))
}

/// POST /api/auth/login
///
/// Authenticate a creator with email and password.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<ApiResponse<AuthPayload>> {
    input.validate()?;
    let email = normalize_email(&input.email);

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let Some(hash) = user.password_hash.as_deref() else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "This account has no password and cannot sign in".into(),
        )));
    };

    let password_valid = verify_password(&input.password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let token = issue_token(&state, &user)?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(Envelope::ok_with_message(
        "Login successful",
        AuthPayload {
            user: user.info(),
            token,
        },
    )))
}

/// GET /api/auth/me
///
/// Return the profile of the bearer token's owner.
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<MePayload>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(Envelope::ok(MePayload { user: user.info() })))
}

/// Sign a token for accounts that can authenticate; `None` for clients.
fn issue_token(state: &AppState, user: &User) -> AppResult<Option<String>> {
    if user.role != Role::Creator {
        return Ok(None);
    }
    generate_token(user.id, user.role, &state.config.jwt)
        .map(Some)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
}
