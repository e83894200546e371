//! Route definitions for `/teams` and `/subteams`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::teams;
use crate::state::AppState;

/// Routes mounted at `/teams`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create (admin)
/// GET    /{id}                          -> get_by_id (members + subteams)
/// PATCH  /{id}                          -> update (admin)
/// DELETE /{id}                          -> delete (admin)
/// POST   /{id}/members                  -> add_member (admin)
/// DELETE /{id}/members/{employee_id}    -> remove_member (admin)
/// POST   /{id}/subteams                 -> create_subteam (admin)
/// ```
pub fn team_router() -> Router<AppState> {
    Router::new()
        .route("/", get(teams::list).post(teams::create))
        .route(
            "/{id}",
            get(teams::get_by_id)
                .patch(teams::update)
                .delete(teams::delete),
        )
        .route("/{id}/members", post(teams::add_member))
        .route(
            "/{id}/members/{employee_id}",
            delete(teams::remove_member),
        )
        .route("/{id}/subteams", post(teams::create_subteam))
}

/// Routes mounted at `/subteams`.
///
/// ```text
/// GET    /{id}                          -> get_subteam (members included)
/// PATCH  /{id}                          -> update_subteam (admin)
/// DELETE /{id}                          -> delete_subteam (admin)
/// POST   /{id}/members                  -> add_subteam_member (admin)
/// DELETE /{id}/members/{employee_id}    -> remove_subteam_member (admin)
/// ```
pub fn subteam_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(teams::get_subteam)
                .patch(teams::update_subteam)
                .delete(teams::delete_subteam),
        )
        .route("/{id}/members", post(teams::add_subteam_member))
        .route(
            "/{id}/members/{employee_id}",
            delete(teams::remove_subteam_member),
        )
}
