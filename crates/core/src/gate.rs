//! Authorization gate.
//!
//! Capability checks applied once the tenant context is resolved.
//! Authentication itself (is there a context at all?) lives in the API
//! extractor; ownership checks against a fetched resource go through
//! [`crate::tenancy::authorize_resource_access`].

use crate::context::TenantContext;
use crate::error::CoreError;

/// Require company-admin capability.
pub fn require_admin(ctx: &TenantContext) -> Result<(), CoreError> {
    if ctx.is_admin {
        Ok(())
    } else {
        Err(CoreError::Forbidden("Admin capability required".into()))
    }
}
