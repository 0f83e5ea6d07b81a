//! Handlers for the `/payroll` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use prootly_db::models::payroll::{CreatePayroll, Payroll, UpdatePayroll};
use prootly_db::repositories::PayrollRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::state::AppState;

/// POST /api/payroll
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePayroll>,
) -> AppResult<(StatusCode, Json<Payroll>)> {
    input.validate()?;
    let payroll = PayrollRepo::create(&state.pool, input);
    Ok((StatusCode::CREATED, Json(payroll)))
}

/// GET /api/payroll, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Payroll>>> {
    Ok(Json(PayrollRepo::list(&state.pool)))
}

/// GET /api/payroll/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Payroll>> {
    let payroll =
        PayrollRepo::find_by_id(&state.pool, &id).ok_or_else(|| not_found::<Payroll>(&id))?;
    Ok(Json(payroll))
}

/// PUT /api/payroll/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePayroll>,
) -> AppResult<Json<Payroll>> {
    input.validate()?;
    let payroll =
        PayrollRepo::update(&state.pool, &id, input).ok_or_else(|| not_found::<Payroll>(&id))?;
    Ok(Json(payroll))
}

/// DELETE /api/payroll/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if PayrollRepo::delete(&state.pool, &id) {
        tracing::info!(payroll_id = %id, "Payroll entry deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<Payroll>(&id))
    }
}
