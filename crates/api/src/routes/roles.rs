//! Route definitions for the `/roles` aggregate.

use axum::routing::get;
use axum::Router;

use crate::handlers::roles;
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// GET    /        -> list (children included)
/// POST   /        -> create (admin)
/// GET    /{id}    -> get_by_id (children included)
/// PUT    /{id}    -> update (admin, replace-all)
/// DELETE /{id}    -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(roles::list).post(roles::create))
        .route(
            "/{id}",
            get(roles::get_by_id)
                .put(roles::update)
                .delete(roles::delete),
        )
}
