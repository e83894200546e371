//! Onboarding task templates and per-employee assignments.

use kadro_core::filter::Filterable;
use kadro_core::tenancy::{ResolvesToCompany, ResourceOwnership};
use kadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-company task template row from `onboarding_tasks`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnboardingTask {
    pub id: DbId,
    pub company_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResolvesToCompany for OnboardingTask {
    fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership {
            entity: "OnboardingTask",
            id: self.id,
            company_id: self.company_id,
            owner_employee_id: None,
        }
    }
}

/// DTO for creating a task template.
#[derive(Debug)]
pub struct CreateOnboardingTask {
    pub company_id: DbId,
    pub title: String,
    pub description: Option<String>,
}

/// DTO for updating a task template. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOnboardingTask {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateOnboardingTask {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Assignment row from `employee_onboardings`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeOnboarding {
    pub id: DbId,
    pub task_id: DbId,
    pub employee_id: DbId,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub completed_by: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Assignment joined with its task title, employee name, and the resolved
/// company id (via the employee row).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentDetail {
    pub id: DbId,
    pub task_id: DbId,
    pub employee_id: DbId,
    pub company_id: DbId,
    pub task_title: String,
    pub employee_name: String,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub completed_by: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResolvesToCompany for AssignmentDetail {
    fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership {
            entity: "EmployeeOnboarding",
            id: self.id,
            company_id: self.company_id,
            owner_employee_id: Some(self.employee_id),
        }
    }
}

impl Filterable for AssignmentDetail {
    fn employee_id(&self) -> DbId {
        self.employee_id
    }
    fn status_label(&self) -> &str {
        &self.status
    }
    fn search_fields(&self) -> [Option<&str>; 2] {
        [Some(&self.task_title), Some(&self.employee_name)]
    }
}

/// DTO for assigning a task to an employee.
#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    pub task_id: DbId,
    pub employee_id: DbId,
}
