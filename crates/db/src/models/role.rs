//! Role aggregate: parent row plus five dependent child collections.

use kadro_core::tenancy::{ResolvesToCompany, ResourceOwnership};
use kadro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Parent row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub company_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub salary_range: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ResolvesToCompany for Role {
    fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership {
            entity: "Role",
            id: self.id,
            company_id: self.company_id,
            owner_employee_id: None,
        }
    }
}

/// A child-collection row. All five collections share this shape; rows are
/// keyed by synthetic id and unordered.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoleItem {
    pub id: DbId,
    pub name: String,
}

/// Role enriched with all five child collections.
#[derive(Debug, Serialize)]
pub struct RoleWithChildren {
    pub role: Role,
    pub courses: Vec<RoleItem>,
    pub complementary_courses: Vec<RoleItem>,
    pub technical_skills: Vec<RoleItem>,
    pub behavioral_skills: Vec<RoleItem>,
    pub languages: Vec<RoleItem>,
}

/// Full aggregate payload for create and replace-all update. Submitting a
/// collection (including an empty one) fully replaces the stored set.
#[derive(Debug, Deserialize)]
pub struct RolePayload {
    pub title: String,
    pub description: Option<String>,
    pub salary_range: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub complementary_courses: Vec<String>,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub behavioral_skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
}
