//! Route definitions for the `/documents` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// DELETE /{id}          -> delete
/// PATCH  /{id}/status   -> set_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(documents::list).post(documents::create))
        .route(
            "/{id}",
            get(documents::get_by_id).delete(documents::delete),
        )
        .route("/{id}/status", patch(documents::set_status))
}
