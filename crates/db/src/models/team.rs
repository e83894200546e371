//! Team / subteam models and membership join rows.

use kadro_core::tenancy::{ResolvesToCompany, ResourceOwnership};
use kadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full team row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub company_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResolvesToCompany for Team {
    fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership {
            entity: "Team",
            id: self.id,
            company_id: self.company_id,
            owner_employee_id: None,
        }
    }
}

/// Subteam joined with its parent team's company id. A subteam resolves to
/// its company through the team row, never through client input.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subteam {
    pub id: DbId,
    pub team_id: DbId,
    pub company_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResolvesToCompany for Subteam {
    fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership {
            entity: "Subteam",
            id: self.id,
            company_id: self.company_id,
            owner_employee_id: None,
        }
    }
}

/// Membership row enriched with the employee's name for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MemberInfo {
    pub employee_id: DbId,
    pub employee_name: String,
}

/// DTO for creating a team or subteam.
#[derive(Debug, Deserialize)]
pub struct CreateTeam {
    pub name: String,
}

/// DTO for renaming a team or subteam.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTeam {
    pub name: Option<String>,
}

impl UpdateTeam {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
