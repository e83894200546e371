//! Route definitions for the `/time-off` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::time_off;
use crate::state::AppState;

/// Routes mounted at `/time-off`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create (for self)
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}/status   -> decide (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(time_off::list).post(time_off::create))
        .route("/{id}", get(time_off::get_by_id))
        .route("/{id}/status", patch(time_off::decide))
}
