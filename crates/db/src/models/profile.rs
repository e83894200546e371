//! Singular per-employee profile aggregates: address and photo.
//!
//! Both are natural-keyed by `employee_id` and written with upsert
//! semantics.

use kadro_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full address row from `employee_addresses`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeeAddress {
    pub id: DbId,
    pub employee_id: DbId,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting an address.
#[derive(Debug)]
pub struct UpsertAddress {
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: String,
}

/// Full photo row from `employee_photos`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EmployeePhoto {
    pub id: DbId,
    pub employee_id: DbId,
    /// Opaque storage key; upload transport is out of scope.
    pub file_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
