use axum::routing::get;
use axum::Router;

use crate::handlers::planset;
use crate::state::AppState;

/// Routes mounted at `/plansets`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(planset::list).post(planset::create))
        .route(
            "/{id}",
            get(planset::get_by_id)
                .put(planset::update)
                .delete(planset::delete),
        )
}
