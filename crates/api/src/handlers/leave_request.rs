//! Handlers for the `/leave-requests` resource and its approval workflow.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use prootly_db::models::leave_request::{
    CreateLeaveRequest, LeaveDecision, LeaveRequest, UpdateLeaveRequest,
};
use prootly_db::repositories::LeaveRequestRepo;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::{not_found, required_field};
use crate::state::AppState;

/// POST /api/leave-requests
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLeaveRequest>,
) -> AppResult<(StatusCode, Json<LeaveRequest>)> {
    input.validate()?;
    let request = LeaveRequestRepo::create(&state.pool, input);
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/leave-requests, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LeaveRequest>>> {
    Ok(Json(LeaveRequestRepo::list(&state.pool)))
}

/// GET /api/leave-requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<LeaveRequest>> {
    let request = LeaveRequestRepo::find_by_id(&state.pool, &id)
        .ok_or_else(|| not_found::<LeaveRequest>(&id))?;
    Ok(Json(request))
}

/// PUT /api/leave-requests/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateLeaveRequest>,
) -> AppResult<Json<LeaveRequest>> {
    input.validate()?;
    let request = LeaveRequestRepo::update(&state.pool, &id, input)
        .ok_or_else(|| not_found::<LeaveRequest>(&id))?;
    Ok(Json(request))
}

/// DELETE /api/leave-requests/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if LeaveRequestRepo::delete(&state.pool, &id) {
        tracing::info!(leave_request_id = %id, "Leave request deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<LeaveRequest>(&id))
    }
}

/// PUT /api/leave-requests/{id}/approve
pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<LeaveDecision>,
) -> AppResult<Json<LeaveRequest>> {
    let approved_by = required_field(body.approved_by, "approvedBy")?;
    let request = LeaveRequestRepo::approve(&state.pool, &id, &approved_by)
        .ok_or_else(|| not_found::<LeaveRequest>(&id))?;
    tracing::info!(
        leave_request_id = %id,
        employee_id = %request.employee_id,
        approved_by = %approved_by,
        "Leave request approved"
    );
    Ok(Json(request))
}

/// PUT /api/leave-requests/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<LeaveDecision>,
) -> AppResult<Json<LeaveRequest>> {
    let approved_by = required_field(body.approved_by, "approvedBy")?;
    let request = LeaveRequestRepo::reject(&state.pool, &id, &approved_by, body.comments)
        .ok_or_else(|| not_found::<LeaveRequest>(&id))?;
    tracing::info!(
        leave_request_id = %id,
        employee_id = %request.employee_id,
        approved_by = %approved_by,
        "Leave request rejected"
    );
    Ok(Json(request))
}
