//! Handlers for the `/employees` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use prootly_db::models::attendance::Attendance;
use prootly_db::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use prootly_db::models::leave_request::LeaveRequest;
use prootly_db::models::payroll::Payroll;
use prootly_db::repositories::{AttendanceRepo, EmployeeRepo, LeaveRequestRepo, PayrollRepo};
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::not_found;
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    input.validate()?;
    let employee = EmployeeRepo::create(&state.pool, input)?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    Ok(Json(EmployeeRepo::list(&state.pool)))
}

/// GET /api/employees/search?q=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Employee>>> {
    let query = params.required()?;
    Ok(Json(EmployeeRepo::search(&state.pool, query)))
}

/// GET /api/employees/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee =
        EmployeeRepo::find_by_id(&state.pool, &id).ok_or_else(|| not_found::<Employee>(&id))?;
    Ok(Json(employee))
}

/// PUT /api/employees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    input.validate()?;
    let employee = EmployeeRepo::update(&state.pool, &id, input)
        .ok_or_else(|| not_found::<Employee>(&id))?;
    Ok(Json(employee))
}

/// DELETE /api/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if EmployeeRepo::delete(&state.pool, &id) {
        tracing::info!(employee_id = %id, "Employee deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found::<Employee>(&id))
    }
}

/// GET /api/employees/{id}/attendance
pub async fn list_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Attendance>>> {
    Ok(Json(AttendanceRepo::list_by_employee(&state.pool, &id)))
}

/// GET /api/employees/{id}/leave-requests
pub async fn list_leave_requests(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<LeaveRequest>>> {
    Ok(Json(LeaveRequestRepo::list_by_employee(&state.pool, &id)))
}

/// GET /api/employees/{id}/payroll
pub async fn list_payroll(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Payroll>>> {
    Ok(Json(PayrollRepo::list_by_employee(&state.pool, &id)))
}
