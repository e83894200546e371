//! Handlers for `/teams` and `/subteams`, including membership management.
//!
//! A subteam resolves to its company through the parent team row, so the
//! guard works the same whether the client addresses a team or a subteam.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kadro_core::error::CoreError;
use kadro_core::tenancy::{authorize_resource_access, Access, ResolvesToCompany};
use kadro_core::types::DbId;
use kadro_db::models::team::{CreateTeam, MemberInfo, Subteam, Team, UpdateTeam};
use kadro_db::repositories::{EmployeeRepo, TeamRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::response::{Envelope, MessageEnvelope};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /teams` and `POST /teams/{id}/subteams`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Request body for member addition.
#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub employee_id: DbId,
}

/// Team enriched with members and subteams for detail reads.
#[derive(Debug, Serialize)]
pub struct TeamDetail {
    pub team: Team,
    pub members: Vec<MemberInfo>,
    pub subteams: Vec<Subteam>,
}

/// Subteam enriched with members for detail reads.
#[derive(Debug, Serialize)]
pub struct SubteamDetail {
    pub subteam: Subteam,
    pub members: Vec<MemberInfo>,
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// POST /api/v1/teams -- admin.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Json(input): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<Envelope<Team>>)> {
    kadro_core::gate::require_admin(&auth.ctx)?;
    input.validate()?;

    let team = TeamRepo::create(
        &state.pool,
        auth.ctx.company_id,
        &CreateTeam { name: input.name },
    )
    .await?;

    Ok(Envelope::created(team))
}

/// GET /api/v1/teams -- any company member.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthEmployee,
) -> AppResult<(StatusCode, Json<Envelope<Vec<Team>>>)> {
    let teams = TeamRepo::list_by_company(&state.pool, auth.ctx.company_id).await?;
    Ok(Envelope::ok(teams))
}

/// GET /api/v1/teams/{id} -- any company member; members and subteams
/// included.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Envelope<TeamDetail>>)> {
    let team = fetch_team_guarded(&state, &auth, id, Access::any_member()).await?;

    let members = TeamRepo::list_members(&state.pool, id).await?;
    let subteams = TeamRepo::list_subteams(&state.pool, id).await?;

    Ok(Envelope::ok(TeamDetail {
        team,
        members,
        subteams,
    }))
}

/// PATCH /api/v1/teams/{id} -- admin rename.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeam>,
) -> AppResult<(StatusCode, Json<Envelope<Team>>)> {
    fetch_team_guarded(&state, &auth, id, Access::admin()).await?;

    if input.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Update contains no recognized fields".into(),
        )));
    }

    let team = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Team", id })?;

    Ok(Envelope::ok(team))
}

/// DELETE /api/v1/teams/{id} -- admin; subteams and memberships cascade.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<axum::response::Response> {
    fetch_team_guarded(&state, &auth, id, Access::admin()).await?;

    TeamRepo::delete(&state.pool, id).await?;
    Ok(MessageEnvelope::ok("Team deleted"))
}

/// POST /api/v1/teams/{id}/members -- admin; member must be same-company.
pub async fn add_member(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<AddMemberRequest>,
) -> AppResult<(StatusCode, Json<Envelope<Vec<MemberInfo>>>)> {
    fetch_team_guarded(&state, &auth, id, Access::admin()).await?;
    guard_member_employee(&state, &auth, input.employee_id).await?;

    TeamRepo::add_member(&state.pool, id, input.employee_id).await?;

    let members = TeamRepo::list_members(&state.pool, id).await?;
    Ok(Envelope::created(members))
}

/// DELETE /api/v1/teams/{id}/members/{employee_id} -- admin.
pub async fn remove_member(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path((id, employee_id)): Path<(DbId, DbId)>,
) -> AppResult<axum::response::Response> {
    fetch_team_guarded(&state, &auth, id, Access::admin()).await?;

    let removed = TeamRepo::remove_member(&state.pool, id, employee_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id: employee_id,
        }));
    }

    Ok(MessageEnvelope::ok("Member removed"))
}

// ---------------------------------------------------------------------------
// Subteams
// ---------------------------------------------------------------------------

/// POST /api/v1/teams/{id}/subteams -- admin; the parent team must resolve
/// to the actor's company.
pub async fn create_subteam(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<CreateTeamRequest>,
) -> AppResult<(StatusCode, Json<Envelope<Subteam>>)> {
    fetch_team_guarded(&state, &auth, id, Access::admin()).await?;
    input.validate()?;

    let subteam =
        TeamRepo::create_subteam(&state.pool, id, &CreateTeam { name: input.name }).await?;

    Ok(Envelope::created(subteam))
}

/// GET /api/v1/subteams/{id} -- any company member; members included.
pub async fn get_subteam(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Envelope<SubteamDetail>>)> {
    let subteam = fetch_subteam_guarded(&state, &auth, id, Access::any_member()).await?;

    let members = TeamRepo::list_subteam_members(&state.pool, id).await?;
    Ok(Envelope::ok(SubteamDetail { subteam, members }))
}

/// PATCH /api/v1/subteams/{id} -- admin rename.
pub async fn update_subteam(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeam>,
) -> AppResult<(StatusCode, Json<Envelope<Subteam>>)> {
    fetch_subteam_guarded(&state, &auth, id, Access::admin()).await?;

    if input.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Update contains no recognized fields".into(),
        )));
    }

    let subteam = TeamRepo::update_subteam(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Subteam",
            id,
        })?;

    Ok(Envelope::ok(subteam))
}

/// DELETE /api/v1/subteams/{id} -- admin; memberships cascade.
pub async fn delete_subteam(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<axum::response::Response> {
    fetch_subteam_guarded(&state, &auth, id, Access::admin()).await?;

    TeamRepo::delete_subteam(&state.pool, id).await?;
    Ok(MessageEnvelope::ok("Subteam deleted"))
}

/// POST /api/v1/subteams/{id}/members -- admin; member must be same-company.
pub async fn add_subteam_member(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<AddMemberRequest>,
) -> AppResult<(StatusCode, Json<Envelope<Vec<MemberInfo>>>)> {
    fetch_subteam_guarded(&state, &auth, id, Access::admin()).await?;
    guard_member_employee(&state, &auth, input.employee_id).await?;

    TeamRepo::add_subteam_member(&state.pool, id, input.employee_id).await?;

    let members = TeamRepo::list_subteam_members(&state.pool, id).await?;
    Ok(Envelope::created(members))
}

/// DELETE /api/v1/subteams/{id}/members/{employee_id} -- admin.
pub async fn remove_subteam_member(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path((id, employee_id)): Path<(DbId, DbId)>,
) -> AppResult<axum::response::Response> {
    fetch_subteam_guarded(&state, &auth, id, Access::admin()).await?;

    let removed = TeamRepo::remove_subteam_member(&state.pool, id, employee_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SubteamMember",
            id: employee_id,
        }));
    }

    Ok(MessageEnvelope::ok("Member removed"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn fetch_team_guarded(
    state: &AppState,
    auth: &AuthEmployee,
    id: DbId,
    access: Access,
) -> AppResult<Team> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Team", id })?;

    authorize_resource_access(&team.ownership(), &auth.ctx, access)?;
    Ok(team)
}

async fn fetch_subteam_guarded(
    state: &AppState,
    auth: &AuthEmployee,
    id: DbId,
    access: Access,
) -> AppResult<Subteam> {
    let subteam = TeamRepo::find_subteam_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Subteam",
            id,
        })?;

    authorize_resource_access(&subteam.ownership(), &auth.ctx, access)?;
    Ok(subteam)
}

/// Membership targets must resolve to the actor's company; a cross-tenant
/// employee id reads as not-found.
async fn guard_member_employee(
    state: &AppState,
    auth: &AuthEmployee,
    employee_id: DbId,
) -> AppResult<()> {
    let employee = EmployeeRepo::find_by_id(&state.pool, employee_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Employee",
            id: employee_id,
        })?;

    authorize_resource_access(&employee.ownership(), &auth.ctx, Access::any_member())?;
    Ok(())
}
