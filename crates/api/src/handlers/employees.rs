//! Handlers for the `/employees` resource, including the singular profile
//! sub-resources (address, photo).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kadro_core::error::CoreError;
use kadro_core::status::EmployeeStatus;
use kadro_core::tenancy::{authorize_resource_access, Access, ResolvesToCompany};
use kadro_core::types::DbId;
use kadro_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use kadro_db::models::profile::{EmployeeAddress, EmployeePhoto, UpsertAddress};
use kadro_db::repositories::{EmployeeRepo, ProfileRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthEmployee;
use crate::response::{Envelope, MessageEnvelope};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /employees` (admin invite).
#[derive(Debug, Deserialize, Validate)]
pub struct InviteEmployeeRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub job_title: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Request body for `PUT /employees/{id}/address`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertAddressRequest {
    #[validate(length(min = 1, message = "street must not be empty"))]
    pub street: String,
    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,
    pub state: Option<String>,
    pub zip: Option<String>,
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
}

/// Request body for `PUT /employees/{id}/photo`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertPhotoRequest {
    #[validate(length(min = 1, message = "file_path must not be empty"))]
    pub file_path: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/employees -- any company member may read the roster.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthEmployee,
) -> AppResult<(StatusCode, Json<Envelope<Vec<Employee>>>)> {
    let employees = EmployeeRepo::list_by_company(&state.pool, auth.ctx.company_id).await?;
    Ok(Envelope::ok(employees))
}

/// GET /api/v1/employees/{id} -- owner or admin.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Envelope<Employee>>)> {
    let employee = fetch_guarded(&state, &auth, id, Access::owner_or_admin()).await?;
    Ok(Envelope::ok(employee))
}

/// POST /api/v1/employees -- admin invite. Creates the employee row without
/// a credential; `user_id` stays null until the invite is accepted.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Json(input): Json<InviteEmployeeRequest>,
) -> AppResult<(StatusCode, Json<Envelope<Employee>>)> {
    kadro_core::gate::require_admin(&auth.ctx)?;
    input.validate()?;

    let employee = EmployeeRepo::create(
        &state.pool,
        &CreateEmployee {
            company_id: auth.ctx.company_id,
            user_id: None,
            name: input.name,
            email: input.email,
            job_title: input.job_title,
            is_admin: input.is_admin,
        },
    )
    .await?;

    tracing::info!(employee_id = employee.id, "Employee invited");
    Ok(Envelope::created(employee))
}

/// PATCH /api/v1/employees/{id} -- admin partial update.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<(StatusCode, Json<Envelope<Employee>>)> {
    fetch_guarded(&state, &auth, id, Access::admin()).await?;

    if input.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Update contains no recognized fields".into(),
        )));
    }

    // Status labels are validated here; the CHECK constraint is a backstop.
    if let Some(status) = &input.status {
        EmployeeStatus::parse(status)
            .map_err(|_| AppError::BadRequest(format!("Unknown employee status '{status}'")))?;
    }

    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Employee",
            id,
        })?;

    Ok(Envelope::ok(employee))
}

/// DELETE /api/v1/employees/{id} -- admin; dependent rows cascade.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<axum::response::Response> {
    fetch_guarded(&state, &auth, id, Access::admin()).await?;

    EmployeeRepo::delete(&state.pool, id).await?;
    Ok(MessageEnvelope::ok("Employee deleted"))
}

// -- Address ---------------------------------------------------------------

/// PUT /api/v1/employees/{id}/address -- owner-or-admin upsert.
pub async fn put_address(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertAddressRequest>,
) -> AppResult<(StatusCode, Json<Envelope<EmployeeAddress>>)> {
    fetch_guarded(&state, &auth, id, Access::owner_or_admin()).await?;
    input.validate()?;

    let address = ProfileRepo::upsert_address(
        &state.pool,
        id,
        &UpsertAddress {
            street: input.street,
            city: input.city,
            state: input.state,
            zip: input.zip,
            country: input.country,
        },
    )
    .await?;

    Ok(Envelope::ok(address))
}

/// GET /api/v1/employees/{id}/address -- owner-or-admin.
pub async fn get_address(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Envelope<EmployeeAddress>>)> {
    fetch_guarded(&state, &auth, id, Access::owner_or_admin()).await?;

    let address = ProfileRepo::find_address(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "EmployeeAddress",
            id,
        })?;

    Ok(Envelope::ok(address))
}

// -- Photo -----------------------------------------------------------------

/// PUT /api/v1/employees/{id}/photo -- owner-or-admin upsert of the storage
/// key. Upload transport is out of scope; the key is opaque.
pub async fn put_photo(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertPhotoRequest>,
) -> AppResult<(StatusCode, Json<Envelope<EmployeePhoto>>)> {
    fetch_guarded(&state, &auth, id, Access::owner_or_admin()).await?;
    input.validate()?;

    let photo = ProfileRepo::upsert_photo(&state.pool, id, &input.file_path).await?;
    Ok(Envelope::ok(photo))
}

/// GET /api/v1/employees/{id}/photo -- owner-or-admin.
pub async fn get_photo(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Envelope<EmployeePhoto>>)> {
    fetch_guarded(&state, &auth, id, Access::owner_or_admin()).await?;

    let photo = ProfileRepo::find_photo(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "EmployeePhoto",
            id,
        })?;

    Ok(Envelope::ok(photo))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch an employee and run the tenant/capability guard. The tenant check
/// runs first, so cross-tenant ids read as not-found.
async fn fetch_guarded(
    state: &AppState,
    auth: &AuthEmployee,
    id: DbId,
    access: Access,
) -> AppResult<Employee> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Employee",
            id,
        })?;

    authorize_resource_access(&employee.ownership(), &auth.ctx, access)?;
    Ok(employee)
}
