use axum::routing::get;
use axum::Router;

use crate::handlers::payroll;
use crate::state::AppState;

/// Routes mounted at `/payroll`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payroll::list).post(payroll::create))
        .route(
            "/{id}",
            get(payroll::get_by_id)
                .put(payroll::update)
                .delete(payroll::delete),
        )
}
