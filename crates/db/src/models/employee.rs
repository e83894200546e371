//! Employee model and DTOs.

use kadro_core::tenancy::{ResolvesToCompany, ResourceOwnership};
use kadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full employee row from the `employees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Employee {
    pub id: DbId,
    pub company_id: DbId,
    /// Credential binding; `None` until an invite is accepted.
    pub user_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub is_admin: bool,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResolvesToCompany for Employee {
    fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership {
            entity: "Employee",
            id: self.id,
            company_id: self.company_id,
            owner_employee_id: Some(self.id),
        }
    }
}

/// DTO for creating an employee (registration or admin invite).
#[derive(Debug)]
pub struct CreateEmployee {
    pub company_id: DbId,
    pub user_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub is_admin: bool,
}

/// DTO for updating an employee. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub job_title: Option<String>,
    pub is_admin: Option<bool>,
    pub status: Option<String>,
}

impl UpdateEmployee {
    /// True when the patch carries zero recognized fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.job_title.is_none()
            && self.is_admin.is_none()
            && self.status.is_none()
    }
}
