pub mod attendance;
pub mod client;
pub mod comment;
pub mod department;
pub mod employee;
pub mod health;
pub mod leave_request;
pub mod payroll;
pub mod planset;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /employees                                       list, create
/// /employees/search?q=                             search name / email
/// /employees/{id}                                  get, update, delete
/// /employees/{id}/attendance                       attendance rows (GET)
/// /employees/{id}/leave-requests                   leave requests (GET)
/// /employees/{id}/payroll                          payroll entries (GET)
///
/// /clients                                         list, create
/// /clients/search?q=                               search company / contact / email
/// /clients/{id}                                    get, update, delete
///
/// /projects?status=                                list (optionally filtered), create
/// /projects/stats                                  totals per status (GET)
/// /projects/{id}                                   get, update, delete
/// /projects/{id}/plansets                          plansets of the project (GET)
///
/// /comments                                        list, create
///
/// /plansets                                        list, create
/// /plansets/{id}                                   get, update, delete
///
/// /attendance?date=                                list (optionally one day), create
/// /attendance/today/{employee_id}                  today's row or null (GET)
/// /attendance/punch-in                             punch in (POST)
/// /attendance/punch-out                            punch out (POST)
/// /attendance/{id}                                 get, correct, delete
///
/// /leave-requests                                  list, create
/// /leave-requests/{id}                             get, update, delete
/// /leave-requests/{id}/approve                     approve (PUT)
/// /leave-requests/{id}/reject                      reject (PUT)
///
/// /departments                                     list, create
/// /departments/{id}                                get, update, delete
///
/// /payroll                                         list, create
/// /payroll/{id}                                    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", employee::router())
        .nest("/clients", client::router())
        .nest("/projects", project::router())
        .nest("/comments", comment::router())
        .nest("/plansets", planset::router())
        .nest("/attendance", attendance::router())
        .nest("/leave-requests", leave_request::router())
        .nest("/departments", department::router())
        .nest("/payroll", payroll::router())
}
