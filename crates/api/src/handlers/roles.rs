//! Handlers for the `/roles` aggregate.
//!
//! A role carries five dependent child collections with replace-all update
//! semantics; the repository runs the whole rewrite in one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kadro_core::error::CoreError;
use kadro_core::tenancy::{authorize_resource_access, Access, ResolvesToCompany};
use kadro_core::types::DbId;
use kadro_db::models::role::{Role, RolePayload, RoleWithChildren};
use kadro_db::repositories::RoleRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::response::{Envelope, MessageEnvelope};
use crate::state::AppState;

/// Request body for `POST /roles` and `PUT /roles/{id}`. Omitted collections
/// deserialize as empty and, on update, clear the stored set.
#[derive(Debug, Deserialize, Validate)]
pub struct RoleRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub salary_range: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub complementary_courses: Vec<String>,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub behavioral_skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl RoleRequest {
    fn into_payload(self) -> RolePayload {
        RolePayload {
            title: self.title,
            description: self.description,
            salary_range: self.salary_range,
            courses: self.courses,
            complementary_courses: self.complementary_courses,
            technical_skills: self.technical_skills,
            behavioral_skills: self.behavioral_skills,
            languages: self.languages,
        }
    }
}

/// POST /api/v1/roles -- admin creates the aggregate with all five child
/// sets.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Json(input): Json<RoleRequest>,
) -> AppResult<(StatusCode, Json<Envelope<RoleWithChildren>>)> {
    kadro_core::gate::require_admin(&auth.ctx)?;
    input.validate()?;

    let role = RoleRepo::create(&state.pool, auth.ctx.company_id, &input.into_payload()).await?;

    let with_children = RoleRepo::find_by_id_with_children(&state.pool, role.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Role vanished after create".into()))?;

    Ok(Envelope::created(with_children))
}

/// GET /api/v1/roles -- any company member; children included.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthEmployee,
) -> AppResult<(StatusCode, Json<Envelope<Vec<RoleWithChildren>>>)> {
    let roles = RoleRepo::list_by_company(&state.pool, auth.ctx.company_id).await?;

    let mut enriched = Vec::with_capacity(roles.len());
    for role in roles {
        if let Some(with_children) =
            RoleRepo::find_by_id_with_children(&state.pool, role.id).await?
        {
            enriched.push(with_children);
        }
    }

    Ok(Envelope::ok(enriched))
}

/// GET /api/v1/roles/{id} -- any company member; children included.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Envelope<RoleWithChildren>>)> {
    fetch_guarded(&state, &auth, id, Access::any_member()).await?;

    let with_children = RoleRepo::find_by_id_with_children(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Role", id })?;

    Ok(Envelope::ok(with_children))
}

/// PUT /api/v1/roles/{id} -- admin replace-all update.
///
/// After a successful update, reading the role yields exactly the submitted
/// children, including empty sets.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<RoleRequest>,
) -> AppResult<(StatusCode, Json<Envelope<RoleWithChildren>>)> {
    fetch_guarded(&state, &auth, id, Access::admin()).await?;
    input.validate()?;

    RoleRepo::update(&state.pool, id, &input.into_payload())
        .await?
        .ok_or(CoreError::NotFound { entity: "Role", id })?;

    let with_children = RoleRepo::find_by_id_with_children(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Role", id })?;

    Ok(Envelope::ok(with_children))
}

/// DELETE /api/v1/roles/{id} -- admin; children cascade.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<axum::response::Response> {
    fetch_guarded(&state, &auth, id, Access::admin()).await?;

    RoleRepo::delete(&state.pool, id).await?;
    Ok(MessageEnvelope::ok("Role deleted"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn fetch_guarded(
    state: &AppState,
    auth: &AuthEmployee,
    id: DbId,
    access: Access,
) -> AppResult<Role> {
    let role = RoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Role", id })?;

    authorize_resource_access(&role.ownership(), &auth.ctx, access)?;
    Ok(role)
}
