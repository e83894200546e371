//! Credential (user) model.
//!
//! A user row is tenant-free; the employee row binds the credential to a
//! company. Contains the password hash -- NEVER serialize this to API
//! responses directly.

use kadro_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a credential.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
}
