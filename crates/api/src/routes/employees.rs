//! Route definitions for the `/employees` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create (admin invite)
/// GET    /{id}           -> get_by_id
/// PATCH  /{id}           -> update (admin)
/// DELETE /{id}           -> delete (admin)
/// GET    /{id}/address   -> get_address
/// PUT    /{id}/address   -> put_address
/// GET    /{id}/photo     -> get_photo
/// PUT    /{id}/photo     -> put_photo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(employees::list).post(employees::create))
        .route(
            "/{id}",
            get(employees::get_by_id)
                .patch(employees::update)
                .delete(employees::delete),
        )
        .route(
            "/{id}/address",
            get(employees::get_address).put(employees::put_address),
        )
        .route(
            "/{id}/photo",
            get(employees::get_photo).put(employees::put_photo),
        )
}
