//! Kadro domain core.
//!
//! Pure, store-agnostic logic shared by the persistence and API layers:
//! tenant context, the tenant isolation guard, the authorization gate,
//! status workflow rules, and post-query filtering. Nothing in this crate
//! performs I/O; every function takes the resolved [`context::TenantContext`]
//! and already-fetched rows as explicit parameters.

pub mod context;
pub mod error;
pub mod filter;
pub mod gate;
pub mod status;
pub mod tenancy;
pub mod types;
pub mod workflow;
