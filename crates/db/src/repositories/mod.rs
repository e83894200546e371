//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Detail lookups that cross
//! the ownership chain (document → employee → company, subteam → team →
//! company) perform the join server-side so the tenant isolation guard
//! never trusts a client-supplied company id.

pub mod company_repo;
pub mod document_repo;
pub mod employee_repo;
pub mod onboarding_repo;
pub mod profile_repo;
pub mod role_repo;
pub mod session_repo;
pub mod team_repo;
pub mod time_off_repo;
pub mod user_repo;

pub use company_repo::CompanyRepo;
pub use document_repo::DocumentRepo;
pub use employee_repo::EmployeeRepo;
pub use onboarding_repo::OnboardingRepo;
pub use profile_repo::ProfileRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use team_repo::TeamRepo;
pub use time_off_repo::TimeOffRepo;
pub use user_repo::UserRepo;
