//! Route definitions for the `/attendance` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Routes mounted at `/attendance`.
///
/// ```text
/// GET    /                        -> list (?date=YYYY-MM-DD)
/// POST   /                        -> create
/// GET    /today/{employee_id}     -> today
/// POST   /punch-in                -> punch_in
/// POST   /punch-out               -> punch_out
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(attendance::list).post(attendance::create))
        .route("/today/{employee_id}", get(attendance::today))
        .route("/punch-in", post(attendance::punch_in))
        .route("/punch-out", post(attendance::punch_out))
        .route(
            "/{id}",
            get(attendance::get_by_id)
                .put(attendance::update)
                .delete(attendance::delete),
        )
}
