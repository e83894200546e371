//! Document model and DTOs.

use kadro_core::filter::Filterable;
use kadro_core::tenancy::{ResolvesToCompany, ResourceOwnership};
use kadro_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full document row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub employee_id: DbId,
    pub name: String,
    /// Opaque storage key; transport mechanics are out of scope.
    pub file_path: String,
    pub status: String,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Document joined with its owner for guarding and display. The
/// `company_id` comes from the employee join, never from the client.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentWithOwner {
    pub id: DbId,
    pub employee_id: DbId,
    pub company_id: DbId,
    pub employee_name: String,
    pub name: String,
    pub file_path: String,
    pub status: String,
    pub expires_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResolvesToCompany for DocumentWithOwner {
    fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership {
            entity: "Document",
            id: self.id,
            company_id: self.company_id,
            owner_employee_id: Some(self.employee_id),
        }
    }
}

impl Filterable for DocumentWithOwner {
    fn employee_id(&self) -> DbId {
        self.employee_id
    }
    fn status_label(&self) -> &str {
        &self.status
    }
    fn search_fields(&self) -> [Option<&str>; 2] {
        [Some(&self.name), Some(&self.employee_name)]
    }
}

/// DTO for filing a new document.
#[derive(Debug)]
pub struct CreateDocument {
    pub employee_id: DbId,
    pub name: String,
    pub file_path: String,
    pub expires_at: Option<Timestamp>,
}
