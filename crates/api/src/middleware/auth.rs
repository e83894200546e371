//! JWT-based authentication extractor for Axum handlers.
//!
//! [`AuthEmployee`] turns a Bearer token into a [`TenantContext`] by resolving
//! the credential's employee row. Every tenant-scoped handler takes it as a
//! parameter, so no handler can forget to establish the caller's company.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use kadro_core::context::TenantContext;
use kadro_core::error::CoreError;
use kadro_core::types::DbId;
use kadro_db::repositories::EmployeeRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated employee extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthEmployee) -> AppResult<Json<()>> {
///     tracing::info!(company_id = auth.ctx.company_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthEmployee {
    /// The credential's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// Resolved tenant context for authorization decisions.
    pub ctx: TenantContext,
}

impl FromRequestParts<AppState> for AuthEmployee {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        // A valid token whose credential has no employee row (e.g. the
        // employee was deleted after issuance) cannot act in any tenant.
        let employee = EmployeeRepo::find_by_user_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Credential is not linked to an employee".into(),
                ))
            })?;

        Ok(AuthEmployee {
            user_id: claims.sub,
            ctx: TenantContext::new(employee.company_id, employee.id, employee.is_admin),
        })
    }
}
