//! Handlers for `/onboarding`: task templates and per-employee assignments.
//!
//! Status transitions run through the workflow engine; the handler fetches
//! the current row, applies the patch, and persists the computed state
//! verbatim.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use kadro_core::error::CoreError;
use kadro_core::filter::apply_filters;
use kadro_core::status::OnboardingStatus;
use kadro_core::tenancy::{authorize_resource_access, Access, ResolvesToCompany};
use kadro_core::types::DbId;
use kadro_core::workflow::{apply_onboarding_patch, OnboardingPatch, OnboardingState};
use kadro_db::models::onboarding::{
    AssignmentDetail, CreateAssignment, CreateOnboardingTask, EmployeeOnboarding, OnboardingTask,
    UpdateOnboardingTask,
};
use kadro_db::repositories::{EmployeeRepo, OnboardingRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::query::FilterQuery;
use crate::response::{Envelope, MessageEnvelope};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /onboarding/tasks`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
}

/// Request body for `PATCH /onboarding/assignments/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub status: Option<OnboardingStatus>,
    /// Who completed the task; defaults to the actor on completion.
    pub completed_by: Option<DbId>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Task templates
// ---------------------------------------------------------------------------

/// POST /api/v1/onboarding/tasks -- admin creates a company template.
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Json(input): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Envelope<OnboardingTask>>)> {
    kadro_core::gate::require_admin(&auth.ctx)?;
    input.validate()?;

    let task = OnboardingRepo::create_task(
        &state.pool,
        &CreateOnboardingTask {
            company_id: auth.ctx.company_id,
            title: input.title,
            description: input.description,
        },
    )
    .await?;

    Ok(Envelope::created(task))
}

/// GET /api/v1/onboarding/tasks -- any company member.
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthEmployee,
) -> AppResult<(StatusCode, Json<Envelope<Vec<OnboardingTask>>>)> {
    let tasks = OnboardingRepo::list_tasks(&state.pool, auth.ctx.company_id).await?;
    Ok(Envelope::ok(tasks))
}

/// PATCH /api/v1/onboarding/tasks/{id} -- admin partial update.
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOnboardingTask>,
) -> AppResult<(StatusCode, Json<Envelope<OnboardingTask>>)> {
    fetch_task_guarded(&state, &auth, id, Access::admin()).await?;

    if input.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Update contains no recognized fields".into(),
        )));
    }

    let task = OnboardingRepo::update_task(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "OnboardingTask",
            id,
        })?;

    Ok(Envelope::ok(task))
}

/// DELETE /api/v1/onboarding/tasks/{id} -- admin; assignments cascade.
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<axum::response::Response> {
    fetch_task_guarded(&state, &auth, id, Access::admin()).await?;

    OnboardingRepo::delete_task(&state.pool, id).await?;
    Ok(MessageEnvelope::ok("Onboarding task deleted"))
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

/// POST /api/v1/onboarding/assignments
///
/// Admin assigns a task to an employee. Both the task and the employee must
/// resolve to the actor's company; the unique constraint turns a duplicate
/// assignment into a conflict.
pub async fn create_assignment(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Json(input): Json<CreateAssignment>,
) -> AppResult<(StatusCode, Json<Envelope<EmployeeOnboarding>>)> {
    fetch_task_guarded(&state, &auth, input.task_id, Access::admin()).await?;

    let employee = EmployeeRepo::find_by_id(&state.pool, input.employee_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Employee",
            id: input.employee_id,
        })?;
    authorize_resource_access(&employee.ownership(), &auth.ctx, Access::admin())?;

    let assignment = OnboardingRepo::create_assignment(&state.pool, &input).await?;
    Ok(Envelope::created(assignment))
}

/// GET /api/v1/onboarding/assignments
///
/// Admins see the whole company with optional filters; everyone else sees
/// their own assignments.
pub async fn list_assignments(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Query(query): Query<FilterQuery>,
) -> AppResult<(StatusCode, Json<Envelope<Vec<AssignmentDetail>>>)> {
    let assignments = if auth.ctx.is_admin {
        OnboardingRepo::list_assignments_by_company(&state.pool, auth.ctx.company_id).await?
    } else {
        OnboardingRepo::list_assignments_by_employee(&state.pool, auth.ctx.employee_id).await?
    };

    Ok(Envelope::ok(apply_filters(assignments, &query.into_spec())))
}

/// PATCH /api/v1/onboarding/assignments/{id} -- owner or admin.
///
/// Applies the status workflow: completing stamps `completed_at`/
/// `completed_by`, reopening clears them, re-completing keeps the original
/// stamps, and an empty patch is rejected before any write.
pub async fn update_assignment(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssignmentRequest>,
) -> AppResult<(StatusCode, Json<Envelope<EmployeeOnboarding>>)> {
    let detail = fetch_assignment_guarded(&state, &auth, id, Access::owner_or_admin()).await?;

    let current = OnboardingState {
        status: OnboardingStatus::parse(&detail.status)?,
        completed_at: detail.completed_at,
        completed_by: detail.completed_by,
        notes: detail.notes,
    };
    let patch = OnboardingPatch {
        status: input.status,
        completed_by: input.completed_by,
        notes: input.notes,
    };

    let next = apply_onboarding_patch(&current, &patch, auth.ctx.employee_id, Utc::now())?;

    let assignment = OnboardingRepo::save_assignment_state(&state.pool, id, &next)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "EmployeeOnboarding",
            id,
        })?;

    Ok(Envelope::ok(assignment))
}

/// DELETE /api/v1/onboarding/assignments/{id} -- admin.
pub async fn delete_assignment(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<axum::response::Response> {
    fetch_assignment_guarded(&state, &auth, id, Access::admin()).await?;

    OnboardingRepo::delete_assignment(&state.pool, id).await?;
    Ok(MessageEnvelope::ok("Assignment deleted"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn fetch_task_guarded(
    state: &AppState,
    auth: &AuthEmployee,
    id: DbId,
    access: Access,
) -> AppResult<OnboardingTask> {
    let task = OnboardingRepo::find_task_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "OnboardingTask",
            id,
        })?;

    authorize_resource_access(&task.ownership(), &auth.ctx, access)?;
    Ok(task)
}

async fn fetch_assignment_guarded(
    state: &AppState,
    auth: &AuthEmployee,
    id: DbId,
    access: Access,
) -> AppResult<AssignmentDetail> {
    let assignment = OnboardingRepo::find_assignment_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "EmployeeOnboarding",
            id,
        })?;

    authorize_resource_access(&assignment.ownership(), &auth.ctx, access)?;
    Ok(assignment)
}
