//! Handlers for the `/attendance` resource, including punch-in / punch-out.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use prootly_db::models::attendance::{Attendance, CreateAttendance, UpdateAttendance};
use prootly_db::repositories::AttendanceRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::{not_found, required_field};
use crate::query::DateFilter;
use crate::state::AppState;

/// Body of the punch-in / punch-out endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchRequest {
    pub employee_id: Option<String>,
}

/// GET /api/attendance, optionally `?date=YYYY-MM-DD`. Newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<DateFilter>,
) -> AppResult<Json<Vec<Attendance>>> {
    let rows = match filter.date {
        Some(date) => AttendanceRepo::list_by_date(&state.pool, date),
        None => AttendanceRepo::list(&state.pool),
    };
    Ok(Json(rows))
}

/// POST /api/attendance
///
/// Records a day directly (absences, corrections entered by an admin).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAttendance>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    input.validate()?;
    let row = AttendanceRepo::create(&state.pool, input)?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/attendance/today/{employee_id}
///
/// Responds with `null` when the employee has no row today.
pub async fn today(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Option<Attendance>>> {
    Ok(Json(AttendanceRepo::find_today(&state.pool, &employee_id)))
}

/// POST /api/attendance/punch-in
pub async fn punch_in(
    State(state): State<AppState>,
    Json(body): Json<PunchRequest>,
) -> AppResult<(StatusCode, Json<Attendance>)> {
    let employee_id = required_field(body.employee_id, "employeeId")?;
    let row = AttendanceRepo::punch_in(&state.pool, &employee_id)?;
    tracing::info!(
        employee_id = %employee_id,
        attendance_id = %row.id,
        date = %row.date,
        "Punched in"
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// POST /api/attendance/punch-out
pub async fn punch_out(
    State(state): State<AppState>,
    Json(body): Json<PunchRequest>,
) -> AppResult<Json<Attendance>> {
    let employee_id = required_field(body.employee_id, "employeeId")?;
    let row = AttendanceRepo::punch_out(&state.pool, &employee_id)?;
    tracing::info!(
        employee_id = %employee_id,
        attendance_id = %row.id,
        working_minutes = row.working_hours,
        "Punched out"
    );
    Ok(Json(row))
}

/// GET /api/attendance/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Attendance>> {
    let row =
        AttendanceRepo::find_by_id(&state.pool, &id).ok_or_else(|| not_found::<Attendance>(&id))?;
    Ok(Json(row))
}

/// PUT /api/attendance/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateAttendance>,
) -> AppResult<Json<Attendance>> {
    input.validate()?;
    let row = AttendanceRepo::update(&state.pool, &id, input)?
        .ok_or_else(|| not_found::<Attendance>(&id))?;
    Ok(Json(row))
}

/// DELETE /api/attendance/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if AttendanceRepo::delete(&state.pool, &id) {
        tracing::info!(attendance_id = %id, "Attendance row deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<Attendance>(&id))
    }
}
