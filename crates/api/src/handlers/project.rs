//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use prootly_core::stats::ProjectStats;
use prootly_db::models::planset::Planset;
use prootly_db::models::project::{CreateProject, Project, UpdateProject};
use prootly_db::repositories::{PlansetRepo, ProjectRepo};
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::query::StatusFilter;
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input.validate()?;
    let project = ProjectRepo::create(&state.pool, input);
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects, optionally `?status=`.
///
/// An unknown status yields an empty list rather than an error.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = match filter.status.as_deref() {
        Some(status) => ProjectRepo::list_by_status(&state.pool, status),
        None => ProjectRepo::list(&state.pool),
    };
    Ok(Json(projects))
}

/// GET /api/projects/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<ProjectStats>> {
    Ok(Json(ProjectRepo::stats(&state.pool)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project =
        ProjectRepo::find_by_id(&state.pool, &id).ok_or_else(|| not_found::<Project>(&id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    input.validate()?;
    let project =
        ProjectRepo::update(&state.pool, &id, input).ok_or_else(|| not_found::<Project>(&id))?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, &id) {
        tracing::info!(project_id = %id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<Project>(&id))
    }
}

/// GET /api/projects/{id}/plansets
pub async fn list_plansets(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Planset>>> {
    Ok(Json(PlansetRepo::list_by_project(&state.pool, &id)))
}
