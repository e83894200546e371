//! Handlers for the `/auth` resource (register, login, refresh, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use kadro_core::error::CoreError;
use kadro_core::types::DbId;
use kadro_db::models::session::CreateSession;
use kadro_db::repositories::{CompanyRepo, EmployeeRepo, SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::response::{Envelope, MessageEnvelope};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "company_name must not be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication payload returned by register, login, and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub employee: EmployeeInfo,
}

/// Public employee info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct EmployeeInfo {
    pub id: DbId,
    pub company_id: DbId,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a new tenant: company, admin credential, and admin employee, all
/// in one transaction. Returns tokens so the admin is signed in immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Envelope<AuthResponse>>)> {
    input.validate()?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let (_, user, employee) = CompanyRepo::register_tenant(
        &state.pool,
        &input.company_name,
        &input.name,
        &input.email,
        &password_hash,
    )
    .await?;

    let response = create_auth_response(&state, user.id, &employee).await?;
    Ok(Envelope::created(response))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<(StatusCode, Json<Envelope<AuthResponse>>)> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // A credential without an employee row has no tenant to act in.
    let employee = EmployeeRepo::find_by_user_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Credential is not linked to an employee".into(),
            ))
        })?;

    let response = create_auth_response(&state, user.id, &employee).await?;
    Ok(Envelope::ok(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The old
/// session is revoked (token rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<(StatusCode, Json<Envelope<AuthResponse>>)> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_active_by_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke(&state.pool, session.id).await?;

    let employee = EmployeeRepo::find_by_user_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Credential is not linked to an employee".into(),
            ))
        })?;

    let response = create_auth_response(&state, session.user_id, &employee).await?;
    Ok(Envelope::ok(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke every active session for the authenticated credential.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthEmployee,
) -> AppResult<axum::response::Response> {
    SessionRepo::revoke_all_for_user(&state.pool, auth.user_id).await?;
    Ok(MessageEnvelope::ok("Logged out"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate access + refresh tokens, persist a session row, and build the
/// response payload.
async fn create_auth_response(
    state: &AppState,
    user_id: DbId,
    employee: &kadro_db::models::employee::Employee,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user_id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id,
            refresh_token_hash: refresh_hash,
            expires_at,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        employee: EmployeeInfo {
            id: employee.id,
            company_id: employee.company_id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            is_admin: employee.is_admin,
        },
    })
}
