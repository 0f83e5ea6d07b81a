//! Handlers for the `/departments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use prootly_db::models::department::{CreateDepartment, Department, UpdateDepartment};
use prootly_db::repositories::DepartmentRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::state::AppState;

/// POST /api/departments
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDepartment>,
) -> AppResult<(StatusCode, Json<Department>)> {
    input.validate()?;
    let department = DepartmentRepo::create(&state.pool, input)?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// GET /api/departments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    Ok(Json(DepartmentRepo::list(&state.pool)))
}

/// GET /api/departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Department>> {
    let department = DepartmentRepo::find_by_id(&state.pool, &id)
        .ok_or_else(|| not_found::<Department>(&id))?;
    Ok(Json(department))
}

/// PUT /api/departments/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateDepartment>,
) -> AppResult<Json<Department>> {
    input.validate()?;
    let department = DepartmentRepo::update(&state.pool, &id, input)
        .ok_or_else(|| not_found::<Department>(&id))?;
    Ok(Json(department))
}

/// DELETE /api/departments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if DepartmentRepo::delete(&state.pool, &id) {
        tracing::info!(department_id = %id, "Department deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<Department>(&id))
    }
}
