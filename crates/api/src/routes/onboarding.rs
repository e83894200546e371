//! Route definitions for the `/onboarding` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Routes mounted at `/onboarding`.
///
/// ```text
/// GET    /tasks               -> list_tasks
/// POST   /tasks               -> create_task (admin)
/// PATCH  /tasks/{id}          -> update_task (admin)
/// DELETE /tasks/{id}          -> delete_task (admin)
///
/// GET    /assignments         -> list_assignments
/// POST   /assignments         -> create_assignment (admin)
/// PATCH  /assignments/{id}    -> update_assignment
/// DELETE /assignments/{id}    -> delete_assignment (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/tasks",
            get(onboarding::list_tasks).post(onboarding::create_task),
        )
        .route(
            "/tasks/{id}",
            patch(onboarding::update_task).delete(onboarding::delete_task),
        )
        .route(
            "/assignments",
            get(onboarding::list_assignments).post(onboarding::create_assignment),
        )
        .route(
            "/assignments/{id}",
            patch(onboarding::update_assignment).delete(onboarding::delete_assignment),
        )
}
