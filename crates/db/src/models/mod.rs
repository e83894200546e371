//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Detail/list views that join across the ownership chain also carry the
//! resolved `company_id` so handlers can guard them via
//! [`kadro_core::tenancy::ResolvesToCompany`] without a second lookup.

pub mod company;
pub mod document;
pub mod employee;
pub mod onboarding;
pub mod profile;
pub mod role;
pub mod session;
pub mod team;
pub mod time_off;
pub mod user;
