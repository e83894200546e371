//! Tenant isolation guard.
//!
//! Every guarded resource resolves, directly or through a join chain, to an
//! owning company and (where relevant) an owning employee. The persistence
//! layer walks the actual chain server-side (Document via its employee,
//! Subteam via its parent team, Role directly) and hands the result here as
//! a [`ResourceOwnership`]; the check itself is pure.
//!
//! A cross-tenant hit is reported as [`CoreError::NotFound`], never as
//! Forbidden, so existence of foreign-tenant rows does not leak.

use crate::context::TenantContext;
use crate::error::CoreError;
use crate::types::DbId;

/// Where a resource resolves in the tenant hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceOwnership {
    /// Entity label used in not-found messages (e.g. `"Document"`).
    pub entity: &'static str,
    /// The resource's own id, echoed back in not-found errors.
    pub id: DbId,
    /// The company the resource transitively belongs to.
    pub company_id: DbId,
    /// The owning employee, for resources that have one.
    pub owner_employee_id: Option<DbId>,
}

/// What a given operation demands beyond same-tenant membership.
#[derive(Debug, Clone, Copy, Default)]
pub struct Access {
    /// The actor must be a company admin.
    pub require_admin: bool,
    /// The actor must own the resource (admins always pass).
    pub require_owner: bool,
}

impl Access {
    /// Same-tenant membership only.
    pub fn any_member() -> Self {
        Self::default()
    }

    pub fn admin() -> Self {
        Self {
            require_admin: true,
            require_owner: false,
        }
    }

    pub fn owner_or_admin() -> Self {
        Self {
            require_admin: false,
            require_owner: true,
        }
    }
}

/// Implemented by models that carry their ownership chain in-row, so lists
/// can be guarded generically without a second lookup.
pub trait ResolvesToCompany {
    fn ownership(&self) -> ResourceOwnership;
}

/// Check a resolved resource against the actor's context.
///
/// Order matters: the tenant check runs first so a cross-tenant actor can
/// never learn whether the resource exists, regardless of capability.
pub fn authorize_resource_access(
    ownership: &ResourceOwnership,
    ctx: &TenantContext,
    access: Access,
) -> Result<(), CoreError> {
    if ownership.company_id != ctx.company_id {
        return Err(CoreError::NotFound {
            entity: ownership.entity,
            id: ownership.id,
        });
    }

    if access.require_admin && !ctx.is_admin {
        return Err(CoreError::Forbidden("Admin capability required".into()));
    }

    if access.require_owner && !ctx.is_admin {
        match ownership.owner_employee_id {
            Some(owner) if owner == ctx.employee_id => {}
            _ => {
                return Err(CoreError::Forbidden(
                    "Only the owning employee or an admin may access this resource".into(),
                ))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TenantContext;

    fn doc_owned_by(company_id: DbId, owner: DbId) -> ResourceOwnership {
        ResourceOwnership {
            entity: "Document",
            id: 10,
            company_id,
            owner_employee_id: Some(owner),
        }
    }

    #[test]
    fn cross_tenant_is_not_found_even_for_admins() {
        let ownership = doc_owned_by(1, 5);
        let admin_elsewhere = TenantContext::new(2, 99, true);

        let err = authorize_resource_access(&ownership, &admin_elsewhere, Access::admin())
            .expect_err("cross-tenant access must fail");
        assert!(
            matches!(err, CoreError::NotFound { entity: "Document", id: 10 }),
            "cross-tenant failures must read as not-found, got {err:?}"
        );
    }

    #[test]
    fn same_tenant_member_passes_plain_check() {
        let ownership = doc_owned_by(1, 5);
        let member = TenantContext::new(1, 7, false);
        assert!(authorize_resource_access(&ownership, &member, Access::any_member()).is_ok());
    }

    #[test]
    fn non_admin_fails_admin_requirement() {
        let ownership = doc_owned_by(1, 5);
        let member = TenantContext::new(1, 5, false);

        let err = authorize_resource_access(&ownership, &member, Access::admin())
            .expect_err("non-admin must be rejected");
        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[test]
    fn owner_passes_owner_check_without_admin() {
        let ownership = doc_owned_by(1, 5);
        let owner = TenantContext::new(1, 5, false);
        assert!(authorize_resource_access(&ownership, &owner, Access::owner_or_admin()).is_ok());
    }

    #[test]
    fn same_tenant_non_owner_is_forbidden_not_hidden() {
        let ownership = doc_owned_by(1, 5);
        let other = TenantContext::new(1, 6, false);

        let err = authorize_resource_access(&ownership, &other, Access::owner_or_admin())
            .expect_err("foreign owner must be rejected");
        assert!(
            matches!(err, CoreError::Forbidden(_)),
            "same-company non-owner gets 403, not 404, got {err:?}"
        );
    }

    #[test]
    fn admin_passes_owner_check_for_any_employee() {
        let ownership = doc_owned_by(1, 5);
        let admin = TenantContext::new(1, 99, true);
        assert!(authorize_resource_access(&ownership, &admin, Access::owner_or_admin()).is_ok());
    }

    #[test]
    fn ownerless_resource_fails_owner_check_for_non_admins() {
        let ownership = ResourceOwnership {
            entity: "Role",
            id: 3,
            company_id: 1,
            owner_employee_id: None,
        };
        let member = TenantContext::new(1, 5, false);

        let err = authorize_resource_access(&ownership, &member, Access::owner_or_admin())
            .expect_err("no owner to match against");
        assert!(matches!(err, CoreError::Forbidden(_)));
    }
}
