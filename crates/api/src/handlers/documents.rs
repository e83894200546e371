//! Handlers for the `/documents` resource.
//!
//! A document belongs to an employee; its company is resolved through the
//! employee join, so the guard never trusts a client-supplied company id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use kadro_core::error::CoreError;
use kadro_core::filter::apply_filters;
use kadro_core::status::DocumentStatus;
use kadro_core::tenancy::{authorize_resource_access, Access, ResolvesToCompany};
use kadro_core::types::{DbId, Timestamp};
use kadro_db::models::document::{CreateDocument, Document, DocumentWithOwner};
use kadro_db::repositories::{DocumentRepo, EmployeeRepo};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthEmployee;
use crate::query::FilterQuery;
use crate::response::{Envelope, MessageEnvelope};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /documents`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    /// Defaults to the actor; admins may file for any same-company employee.
    pub employee_id: Option<DbId>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "file_path must not be empty"))]
    pub file_path: String,
    pub expires_at: Option<Timestamp>,
}

/// Request body for `PATCH /documents/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetDocumentStatusRequest {
    pub status: DocumentStatus,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/documents
///
/// File a document. The owner defaults to the actor; filing for another
/// employee requires admin, and the target must resolve to the actor's
/// company.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Json(input): Json<CreateDocumentRequest>,
) -> AppResult<(StatusCode, Json<Envelope<Document>>)> {
    input.validate()?;

    let owner_id = input.employee_id.unwrap_or(auth.ctx.employee_id);
    if owner_id != auth.ctx.employee_id {
        let owner = EmployeeRepo::find_by_id(&state.pool, owner_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Employee",
                id: owner_id,
            })?;
        authorize_resource_access(&owner.ownership(), &auth.ctx, Access::admin())?;
    }

    let document = DocumentRepo::create(
        &state.pool,
        &CreateDocument {
            employee_id: owner_id,
            name: input.name,
            file_path: input.file_path,
            expires_at: input.expires_at,
        },
    )
    .await?;

    Ok(Envelope::created(document))
}

/// GET /api/v1/documents
///
/// Admins see the whole company with optional filters; everyone else sees
/// their own documents.
pub async fn list(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Query(query): Query<FilterQuery>,
) -> AppResult<(StatusCode, Json<Envelope<Vec<DocumentWithOwner>>>)> {
    let documents = if auth.ctx.is_admin {
        DocumentRepo::list_by_company(&state.pool, auth.ctx.company_id).await?
    } else {
        DocumentRepo::list_by_employee(&state.pool, auth.ctx.employee_id).await?
    };

    Ok(Envelope::ok(apply_filters(documents, &query.into_spec())))
}

/// GET /api/v1/documents/{id} -- owner or admin. Cross-tenant ids read as
/// not-found; a same-company non-owner gets forbidden.
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Envelope<DocumentWithOwner>>)> {
    let document = fetch_guarded(&state, &auth, id, Access::owner_or_admin()).await?;
    Ok(Envelope::ok(document))
}

/// PATCH /api/v1/documents/{id}/status -- admin review decision.
pub async fn set_status(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
    Json(input): Json<SetDocumentStatusRequest>,
) -> AppResult<(StatusCode, Json<Envelope<Document>>)> {
    fetch_guarded(&state, &auth, id, Access::admin()).await?;

    let document = DocumentRepo::set_status(&state.pool, id, input.status.as_str())
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Document",
            id,
        })?;

    tracing::info!(document_id = id, status = %input.status, "Document status set");
    Ok(Envelope::ok(document))
}

/// DELETE /api/v1/documents/{id} -- owner or admin.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthEmployee,
    Path(id): Path<DbId>,
) -> AppResult<axum::response::Response> {
    fetch_guarded(&state, &auth, id, Access::owner_or_admin()).await?;

    DocumentRepo::delete(&state.pool, id).await?;
    Ok(MessageEnvelope::ok("Document deleted"))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn fetch_guarded(
    state: &AppState,
    auth: &AuthEmployee,
    id: DbId,
    access: Access,
) -> AppResult<DocumentWithOwner> {
    let document = DocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Document",
            id,
        })?;

    authorize_resource_access(&document.ownership(), &auth.ctx, access)?;
    Ok(document)
}
