pub mod auth;
pub mod documents;
pub mod employees;
pub mod health;
pub mod onboarding;
pub mod roles;
pub mod teams;
pub mod time_off;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register tenant (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /employees                                       list, invite (POST: admin)
/// /employees/{id}                                  get, patch, delete
/// /employees/{id}/address                          get, put (owner-or-admin)
/// /employees/{id}/photo                            get, put (owner-or-admin)
///
/// /documents                                       list, create
/// /documents/{id}                                  get, delete
/// /documents/{id}/status                           patch (admin)
///
/// /onboarding/tasks                                list, create (POST: admin)
/// /onboarding/tasks/{id}                           patch, delete (admin)
/// /onboarding/assignments                          list, create (POST: admin)
/// /onboarding/assignments/{id}                     patch, delete
///
/// /time-off                                        list, create
/// /time-off/{id}                                   get
/// /time-off/{id}/status                            patch (admin)
///
/// /roles                                           list, create (POST: admin)
/// /roles/{id}                                      get, put, delete
///
/// /teams                                           list, create (POST: admin)
/// /teams/{id}                                      get, patch, delete
/// /teams/{id}/members                              add member (POST)
/// /teams/{id}/members/{employee_id}                remove member (DELETE)
/// /teams/{id}/subteams                             create subteam (POST)
///
/// /subteams/{id}                                   get, patch, delete
/// /subteams/{id}/members                           add member (POST)
/// /subteams/{id}/members/{employee_id}             remove member (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Company roster and employee profiles.
        .nest("/employees", employees::router())
        // Employee documents.
        .nest("/documents", documents::router())
        // Onboarding templates and assignments.
        .nest("/onboarding", onboarding::router())
        // Time-off requests and decisions.
        .nest("/time-off", time_off::router())
        // Role aggregates with child collections.
        .nest("/roles", roles::router())
        // Teams (also nests member and subteam creation routes).
        .nest("/teams", teams::team_router())
        // Subteams addressed directly.
        .nest("/subteams", teams::subteam_router())
}
