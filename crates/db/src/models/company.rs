//! Company (tenant root) model.

use kadro_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full company row from the `companies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
