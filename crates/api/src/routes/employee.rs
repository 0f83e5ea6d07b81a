//! Route definitions for the `/employees` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /search                -> search
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// GET    /{id}/attendance       -> list_attendance
/// GET    /{id}/leave-requests   -> list_leave_requests
/// GET    /{id}/payroll          -> list_payroll
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(employee::list).post(employee::create))
        .route("/search", get(employee::search))
        .route(
            "/{id}",
            get(employee::get_by_id)
                .put(employee::update)
                .delete(employee::delete),
        )
        .route("/{id}/attendance", get(employee::list_attendance))
        .route("/{id}/leave-requests", get(employee::list_leave_requests))
        .route("/{id}/payroll", get(employee::list_payroll))
}
