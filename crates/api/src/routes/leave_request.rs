//! Route definitions for the `/leave-requests` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::leave_request;
use crate::state::AppState;

/// Routes mounted at `/leave-requests`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// PUT    /{id}/approve      -> approve
/// PUT    /{id}/reject       -> reject
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leave_request::list).post(leave_request::create))
        .route(
            "/{id}",
            get(leave_request::get_by_id)
                .put(leave_request::update)
                .delete(leave_request::delete),
        )
        .route("/{id}/approve", put(leave_request::approve))
        .route("/{id}/reject", put(leave_request::reject))
}
