//! Resolved tenant context for an authenticated actor.
//!
//! The API layer resolves a credential to the employee row it maps to and
//! builds a [`TenantContext`] once per request. Every other component
//! receives this context as an explicit parameter instead of re-deriving
//! "who is asking" from ambient state.

use crate::types::DbId;

/// The single source of truth for the acting employee's identity.
///
/// Absence of a context (a credential with no employee row) is not an error
/// at this layer; callers surface it as an authentication failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext {
    /// The company (tenant) the actor belongs to.
    pub company_id: DbId,
    /// The actor's employee row id within that company.
    pub employee_id: DbId,
    /// Whether the actor holds company-admin capability.
    pub is_admin: bool,
}

impl TenantContext {
    pub fn new(company_id: DbId, employee_id: DbId, is_admin: bool) -> Self {
        Self {
            company_id,
            employee_id,
            is_admin,
        }
    }
}
