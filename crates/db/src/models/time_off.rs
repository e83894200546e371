//! Time-off request model and DTOs.

use chrono::NaiveDate;
use kadro_core::filter::Filterable;
use kadro_core::tenancy::{ResolvesToCompany, ResourceOwnership};
use kadro_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full request row from `time_off_requests`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimeOffRequest {
    pub id: DbId,
    pub employee_id: DbId,
    pub kind: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub status: String,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request joined with its owner's name and resolved company id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimeOffDetail {
    pub id: DbId,
    pub employee_id: DbId,
    pub company_id: DbId,
    pub employee_name: String,
    pub kind: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub status: String,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResolvesToCompany for TimeOffDetail {
    fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership {
            entity: "TimeOffRequest",
            id: self.id,
            company_id: self.company_id,
            owner_employee_id: Some(self.employee_id),
        }
    }
}

impl Filterable for TimeOffDetail {
    fn employee_id(&self) -> DbId {
        self.employee_id
    }
    fn status_label(&self) -> &str {
        &self.status
    }
    fn kind_label(&self) -> Option<&str> {
        Some(&self.kind)
    }
    fn search_fields(&self) -> [Option<&str>; 2] {
        [self.reason.as_deref(), Some(&self.employee_name)]
    }
}

/// DTO for creating a request.
#[derive(Debug)]
pub struct CreateTimeOff {
    pub employee_id: DbId,
    pub kind: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}
