//! Handlers for the `/plansets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use prootly_db::models::planset::{CreatePlanset, Planset, UpdatePlanset};
use prootly_db::repositories::PlansetRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::state::AppState;

/// POST /api/plansets
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlanset>,
) -> AppResult<(StatusCode, Json<Planset>)> {
    input.validate()?;
    let planset = PlansetRepo::create(&state.pool, input);
    tracing::info!(planset_id = %planset.id, project_id = %planset.project_id, "Planset submitted");
    Ok((StatusCode::CREATED, Json(planset)))
}

/// GET /api/plansets, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planset>>> {
    Ok(Json(PlansetRepo::list(&state.pool)))
}

/// GET /api/plansets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Planset>> {
    let planset =
        PlansetRepo::find_by_id(&state.pool, &id).ok_or_else(|| not_found::<Planset>(&id))?;
    Ok(Json(planset))
}

/// PUT /api/plansets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePlanset>,
) -> AppResult<Json<Planset>> {
    input.validate()?;
    let planset =
        PlansetRepo::update(&state.pool, &id, input).ok_or_else(|| not_found::<Planset>(&id))?;
    Ok(Json(planset))
}

/// DELETE /api/plansets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if PlansetRepo::delete(&state.pool, &id) {
        tracing::info!(planset_id = %id, "Planset deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<Planset>(&id))
    }
}
