//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod documents;
pub mod employees;
pub mod onboarding;
pub mod roles;
pub mod teams;
pub mod time_off;
