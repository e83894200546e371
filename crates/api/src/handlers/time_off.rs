//! Handlers for the `/time-off` resource.
//!
//! Decisions run through the workflow engine and are persisted atomically:
//! the request stamps and the optional employee-status flip (approved
//! vacation) commit in one transaction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use kadro_core::error::CoreError;
use kadro_core::filter::apply_filters;
use kadro_core::status::{TimeOffKind, TimeOffStatus};
use kadro_core::tenancy::{authorize_resource_access, Access, ResolvesToCompany};
use kadro_core::types::DbId;
use kadro_core::workflow::{decide_time_off, validate_time_off_range, TimeOffDecision};
use kadro_db::models::time_off::{CreateTimeOff, TimeOffDetail, TimeOffRequest};
use kadro_db::repositories::TimeOffRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::query::FilterQuery;
use crate::response::Envelope;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /time-off`. Always filed for the actor.
#[derive(Debug, Deserialize)]
pub struct CreateTimeOffRequest {
    pub kind: TimeOffKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

/// Request body for `PATCH /time-off/{id}/status`. The target status must be
/// one of the two terminal states.
#[derive(Debug, Deserialize)]
pub struct DecideTimeOffRequest {
    pub status: TimeOffStatus,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/time-off -- file a request for oneself.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Json(input): Json<CreateTimeOffRequest>,
) -> AppResult<(StatusCode, Json<Envelope<TimeOffRequest>>)> {
    // A reversed date range is semantically invalid, not malformed.
    validate_time_off_range(input.start_date, input.end_date)
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let request = TimeOffRepo::create(
        &state.pool,
        &CreateTimeOff {
            employee_id: auth.ctx.employee_id,
            kind: input.kind.as_str().to_string(),
            start_date: input.start_date,
            end_date: input.end_date,
            reason: input.reason,
        },
    )
    .await?;

    Ok(Envelope::created(request))
}

/// GET /api/v1/time-off
///
/// Admins see the whole company with optional filters (including `kind`);
/// everyone else sees their own requests.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Query(query): Query<FilterQuery>,
) -> AppResult<(StatusCode, Json<Envelope<Vec<TimeOffDetail>>>)> {
    let requests = if auth.ctx.is_admin {
        TimeOffRepo::list_by_company(&state.pool, auth.ctx.company_id).await?
    } else {
        TimeOffRepo::list_by_employee(&state.pool, auth.ctx.employee_id).await?
    };

    Ok(Envelope::ok(apply_filters(requests, &query.into_spec())))
}

/// GET /api/v1/time-off/{id} -- owner or admin.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Envelope<TimeOffDetail>>)> {
    let request = fetch_guarded(&state, &auth, id, Access::owner_or_admin()).await?;
    Ok(Envelope::ok(request))
}

/// PATCH /api/v1/time-off/{id}/status -- admin decision.
///
/// Approving stamps `approved_by`/`approved_at`; approving a vacation
/// request additionally flips the owner's employee status, atomically.
/// Re-deciding a terminal request is a conflict.
pub async fn decide(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<DecideTimeOffRequest>,
) -> AppResult<(StatusCode, Json<Envelope<TimeOffRequest>>)> {
    let detail = fetch_guarded(&state, &auth, id, Access::admin()).await?;

    let decision = match input.status {
        TimeOffStatus::Approved => TimeOffDecision::Approve,
        TimeOffStatus::Rejected => TimeOffDecision::Reject,
        TimeOffStatus::Pending => {
            return Err(AppError::BadRequest(
                "status must be 'approved' or 'rejected'".into(),
            ))
        }
    };

    let outcome = decide_time_off(
        TimeOffStatus::parse(&detail.status)?,
        TimeOffKind::parse(&detail.kind)?,
        decision,
        auth.ctx.employee_id,
        Utc::now(),
    )?;

    let request = TimeOffRepo::apply_decision(&state.pool, id, detail.employee_id, &outcome)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "TimeOffRequest",
            id,
        })?;

    tracing::info!(
        request_id = id,
        employee_id = detail.employee_id,
        status = %outcome.status,
        "Time-off request decided"
    );
    Ok(Envelope::ok(request))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn fetch_guarded(
    state: &AppState,
    auth: &AuthEmployee,
    id: DbId,
    access: Access,
) -> AppResult<TimeOffDetail> {
    let request = TimeOffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "TimeOffRequest",
            id,
        })?;

    authorize_resource_access(&request.ownership(), &auth.ctx, access)?;
    Ok(request)
}
