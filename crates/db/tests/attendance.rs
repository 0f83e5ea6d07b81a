//! Integration tests for attendance punch-in / punch-out and the leave
//! approval workflow.
//!
//! A `ManualClock` pins the wall time so worked minutes are deterministic.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Duration, NaiveDate, NaiveTime};
use prootly_core::clock::ManualClock;
use prootly_core::error::CoreError;
use prootly_core::status::{AttendanceStatus, LeaveStatus};
use prootly_db::models::attendance::{CreateAttendance, UpdateAttendance};
use prootly_db::models::leave_request::CreateLeaveRequest;
use prootly_db::repositories::{AttendanceRepo, LeaveRequestRepo};
use prootly_db::{create_pool_with_clock, DbPool};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn store_at(h: u32, m: u32) -> (DbPool, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::at(day(), hm(h, m)));
    (create_pool_with_clock(clock.clone()), clock)
}

fn absence(employee_id: &str, date: NaiveDate) -> CreateAttendance {
    CreateAttendance {
        employee_id: employee_id.to_string(),
        date,
        punch_in: None,
        punch_out: None,
        status: AttendanceStatus::Absent,
        working_hours: None,
        notes: None,
    }
}

fn new_leave(employee_id: &str) -> CreateLeaveRequest {
    let start = day().and_time(hm(0, 0)).and_utc();
    CreateLeaveRequest {
        employee_id: employee_id.to_string(),
        leave_type: "vacation".to_string(),
        start_date: start,
        end_date: start + Duration::days(2),
        days: 3,
        reason: "Family trip".to_string(),
        status: None,
        approved_by: None,
        approved_at: None,
        comments: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Punch-in / punch-out
// ---------------------------------------------------------------------------

#[test]
fn test_punch_in_opens_todays_row() {
    let (store, _) = store_at(9, 0);
    let row = AttendanceRepo::punch_in(&store, "e1").unwrap();

    assert_eq!(row.employee_id, "e1");
    assert_eq!(row.date, day());
    assert_eq!(row.punch_in, Some(hm(9, 0)));
    assert_eq!(row.punch_out, None);
    assert_eq!(row.status, AttendanceStatus::Present);
    assert_eq!(row.working_hours, 0);
    assert_eq!(AttendanceRepo::find_today(&store, "e1"), Some(row));
}

#[test]
fn test_punch_in_drops_seconds() {
    let (store, clock) = store_at(9, 0);
    clock.set_time(NaiveTime::from_hms_opt(9, 4, 59).unwrap());
    let row = AttendanceRepo::punch_in(&store, "e1").unwrap();
    assert_eq!(row.punch_in, Some(hm(9, 4)));
}

#[test]
fn test_second_punch_in_same_day_fails() {
    let (store, clock) = store_at(9, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.set_time(hm(9, 30));

    let result = AttendanceRepo::punch_in(&store, "e1");
    assert_matches!(result, Err(CoreError::InvariantViolation(msg)) if msg == "Already punched in today");
    assert_eq!(AttendanceRepo::list(&store).len(), 1);
}

#[test]
fn test_punch_in_after_punch_out_still_fails() {
    let (store, clock) = store_at(9, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.set_time(hm(12, 0));
    AttendanceRepo::punch_out(&store, "e1").unwrap();
    clock.set_time(hm(13, 0));

    assert_matches!(
        AttendanceRepo::punch_in(&store, "e1"),
        Err(CoreError::InvariantViolation(_))
    );
}

#[test]
fn test_punch_in_is_per_employee() {
    let (store, _) = store_at(9, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();
    assert!(AttendanceRepo::punch_in(&store, "e2").is_ok());
}

#[test]
fn test_punch_in_next_day_opens_new_row() {
    let (store, clock) = store_at(9, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.advance(Duration::days(1));

    let row = AttendanceRepo::punch_in(&store, "e1").unwrap();
    assert_eq!(row.date, day() + Duration::days(1));
    assert_eq!(AttendanceRepo::list_by_employee(&store, "e1").len(), 2);
}

#[test]
fn test_punch_out_without_punch_in_fails() {
    let (store, _) = store_at(17, 0);
    let result = AttendanceRepo::punch_out(&store, "e1");
    assert_matches!(result, Err(CoreError::InvariantViolation(msg)) if msg == "No punch-in record found for today");
}

#[test]
fn test_punch_out_records_worked_minutes() {
    let (store, clock) = store_at(9, 0);
    let opened = AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.set_time(hm(17, 30));

    let closed = AttendanceRepo::punch_out(&store, "e1").unwrap();
    assert_eq!(closed.id, opened.id);
    assert_eq!(closed.punch_out, Some(hm(17, 30)));
    assert_eq!(closed.working_hours, 510);
    assert!(closed.updated_at > opened.updated_at);
}

#[test]
fn test_second_punch_out_overwrites_first() {
    let (store, clock) = store_at(9, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.set_time(hm(12, 0));
    AttendanceRepo::punch_out(&store, "e1").unwrap();
    clock.set_time(hm(18, 0));

    let row = AttendanceRepo::punch_out(&store, "e1").unwrap();
    assert_eq!(row.punch_out, Some(hm(18, 0)));
    assert_eq!(row.working_hours, 540);
}

#[test]
fn test_punch_out_on_row_without_punch_in_fails() {
    let (store, _) = store_at(17, 0);
    AttendanceRepo::create(&store, absence("e1", day())).unwrap();

    assert_matches!(
        AttendanceRepo::punch_out(&store, "e1"),
        Err(CoreError::InvariantViolation(_))
    );
}

#[test]
fn test_punch_out_after_midnight_targets_the_new_day() {
    let (store, clock) = store_at(23, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.advance(Duration::hours(2));

    assert_matches!(
        AttendanceRepo::punch_out(&store, "e1"),
        Err(CoreError::InvariantViolation(_))
    );
}

// ---------------------------------------------------------------------------
// Test: Attendance queries and corrections
// ---------------------------------------------------------------------------

#[test]
fn test_list_by_date_covers_every_employee() {
    let (store, clock) = store_at(9, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.advance(Duration::minutes(3));
    AttendanceRepo::punch_in(&store, "e2").unwrap();
    clock.advance(Duration::days(1));
    AttendanceRepo::punch_in(&store, "e1").unwrap();

    let ids: Vec<_> = AttendanceRepo::list_by_date(&store, day())
        .into_iter()
        .map(|a| a.employee_id)
        .collect();
    assert_eq!(ids, ["e2", "e1"]);
}

#[test]
fn test_find_today_ignores_other_days() {
    let (store, clock) = store_at(9, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.advance(Duration::days(1));
    assert!(AttendanceRepo::find_today(&store, "e1").is_none());
}

#[test]
fn test_manual_correction_can_clear_punch_out() {
    let (store, clock) = store_at(9, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.set_time(hm(17, 0));
    let row = AttendanceRepo::punch_out(&store, "e1").unwrap();

    let patch: UpdateAttendance = serde_json::from_value(serde_json::json!({
        "punchOut": null,
        "notes": "forgot to punch out",
    }))
    .unwrap();
    let corrected = AttendanceRepo::update(&store, &row.id, patch)
        .unwrap()
        .unwrap();
    assert_eq!(corrected.punch_out, None);
    assert_eq!(corrected.punch_in, Some(hm(9, 0)));
    assert_eq!(corrected.notes.as_deref(), Some("forgot to punch out"));
    assert!(corrected.updated_at > row.updated_at);
}

#[test]
fn test_correction_onto_an_occupied_day_conflicts() {
    let (store, clock) = store_at(9, 0);
    clock.advance(-Duration::days(1));
    let yesterday = AttendanceRepo::punch_in(&store, "e1").unwrap();
    clock.advance(Duration::days(1));
    AttendanceRepo::punch_in(&store, "e1").unwrap();

    let patch: UpdateAttendance =
        serde_json::from_value(serde_json::json!({ "date": "2025-06-02" })).unwrap();
    let result = AttendanceRepo::update(&store, &yesterday.id, patch);
    assert_matches!(result, Err(CoreError::Conflict(_)));

    let rows_today = AttendanceRepo::list_by_date(&store, day())
        .into_iter()
        .filter(|a| a.employee_id == "e1")
        .count();
    assert_eq!(rows_today, 1);
    assert_eq!(
        AttendanceRepo::find_by_id(&store, &yesterday.id).unwrap().date,
        day() - Duration::days(1)
    );
}

#[test]
fn test_correction_onto_another_employees_day_conflicts() {
    let (store, _) = store_at(9, 0);
    let row = AttendanceRepo::punch_in(&store, "e1").unwrap();
    AttendanceRepo::punch_in(&store, "e2").unwrap();

    let patch = UpdateAttendance {
        employee_id: Some("e2".to_string()),
        ..Default::default()
    };
    assert_matches!(
        AttendanceRepo::update(&store, &row.id, patch),
        Err(CoreError::Conflict(_))
    );
}

#[test]
fn test_correction_may_keep_its_own_day_or_move_to_a_free_one() {
    let (store, _) = store_at(9, 0);
    let row = AttendanceRepo::punch_in(&store, "e1").unwrap();

    let same_day = UpdateAttendance {
        date: Some(day()),
        status: Some(AttendanceStatus::Late),
        ..Default::default()
    };
    let updated = AttendanceRepo::update(&store, &row.id, same_day)
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, AttendanceStatus::Late);

    let next_day = UpdateAttendance {
        date: Some(day() + Duration::days(1)),
        ..Default::default()
    };
    let moved = AttendanceRepo::update(&store, &row.id, next_day)
        .unwrap()
        .unwrap();
    assert_eq!(moved.date, day() + Duration::days(1));
}

#[test]
fn test_correction_of_unknown_row_is_none() {
    let (store, _) = store_at(9, 0);
    let result = AttendanceRepo::update(&store, "missing", UpdateAttendance::default());
    assert_matches!(result, Ok(None));
}

#[test]
fn test_direct_record_on_an_occupied_day_conflicts() {
    let (store, _) = store_at(9, 0);
    AttendanceRepo::punch_in(&store, "e1").unwrap();

    assert_matches!(
        AttendanceRepo::create(&store, absence("e1", day())),
        Err(CoreError::Conflict(_))
    );
    assert!(AttendanceRepo::create(&store, absence("e2", day())).is_ok());
    assert!(AttendanceRepo::create(&store, absence("e1", day() + Duration::days(1))).is_ok());
}

#[test]
fn test_punch_in_after_direct_absence_record_fails() {
    let (store, _) = store_at(9, 0);
    AttendanceRepo::create(&store, absence("e1", day())).unwrap();
    assert_matches!(
        AttendanceRepo::punch_in(&store, "e1"),
        Err(CoreError::InvariantViolation(_))
    );
}

#[test]
fn test_attendance_list_newest_first() {
    let (store, clock) = store_at(9, 0);
    for employee_id in ["e1", "e2", "e3"] {
        AttendanceRepo::punch_in(&store, employee_id).unwrap();
        clock.advance(Duration::minutes(1));
    }

    let ids: Vec<_> = AttendanceRepo::list(&store)
        .into_iter()
        .map(|a| a.employee_id)
        .collect();
    assert_eq!(ids, ["e3", "e2", "e1"]);
}

#[test]
fn test_delete_attendance() {
    let (store, _) = store_at(9, 0);
    let row = AttendanceRepo::punch_in(&store, "e1").unwrap();
    assert!(AttendanceRepo::delete(&store, &row.id));
    assert!(AttendanceRepo::find_by_id(&store, &row.id).is_none());
    assert!(AttendanceRepo::punch_in(&store, "e1").is_ok());
}

// ---------------------------------------------------------------------------
// Test: Leave approval workflow
// ---------------------------------------------------------------------------

#[test]
fn test_leave_request_defaults_to_pending() {
    let (store, _) = store_at(9, 0);
    let request = LeaveRequestRepo::create(&store, new_leave("e1"));
    assert_eq!(request.status, LeaveStatus::Pending);
    assert_eq!(request.approved_by, None);
    assert_eq!(request.approved_at, None);
}

#[test]
fn test_approve_stamps_reviewer_and_time() {
    let (store, clock) = store_at(9, 0);
    let request = LeaveRequestRepo::create(&store, new_leave("e1"));
    clock.advance(Duration::hours(1));

    let approved = LeaveRequestRepo::approve(&store, &request.id, "admin").unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);
    assert_eq!(approved.approved_by.as_deref(), Some("admin"));
    assert_eq!(approved.approved_at, Some(store.now()));
    assert_eq!(approved.reason, request.reason);
}

#[test]
fn test_reject_stores_comments() {
    let (store, _) = store_at(9, 0);
    let request = LeaveRequestRepo::create(&store, new_leave("e1"));

    let rejected = LeaveRequestRepo::reject(
        &store,
        &request.id,
        "admin",
        Some("Peak season".to_string()),
    )
    .unwrap();
    assert_eq!(rejected.status, LeaveStatus::Rejected);
    assert_eq!(rejected.approved_by.as_deref(), Some("admin"));
    assert!(rejected.approved_at.is_some());
    assert_eq!(rejected.comments.as_deref(), Some("Peak season"));
}

#[test]
fn test_later_decision_overwrites_earlier() {
    let (store, _) = store_at(9, 0);
    let request = LeaveRequestRepo::create(&store, new_leave("e1"));
    LeaveRequestRepo::reject(&store, &request.id, "lead", Some("No".to_string())).unwrap();

    let approved = LeaveRequestRepo::approve(&store, &request.id, "admin").unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);
    assert_eq!(approved.approved_by.as_deref(), Some("admin"));
    assert_eq!(approved.comments.as_deref(), Some("No"));
}

#[test]
fn test_decision_on_unknown_request_is_none() {
    let (store, _) = store_at(9, 0);
    assert!(LeaveRequestRepo::approve(&store, "missing", "admin").is_none());
    assert!(LeaveRequestRepo::reject(&store, "missing", "admin", None).is_none());
}

#[test]
fn test_leave_requests_list_newest_first() {
    let (store, clock) = store_at(9, 0);
    for employee_id in ["e1", "e2", "e3"] {
        LeaveRequestRepo::create(&store, new_leave(employee_id));
        clock.advance(Duration::minutes(1));
    }

    let ids: Vec<_> = LeaveRequestRepo::list(&store)
        .into_iter()
        .map(|r| r.employee_id)
        .collect();
    assert_eq!(ids, ["e3", "e2", "e1"]);
}

#[test]
fn test_leave_request_get_and_delete() {
    let (store, _) = store_at(9, 0);
    let request = LeaveRequestRepo::create(&store, new_leave("e1"));
    assert_eq!(
        LeaveRequestRepo::find_by_id(&store, &request.id),
        Some(request.clone())
    );

    assert!(LeaveRequestRepo::delete(&store, &request.id));
    assert!(LeaveRequestRepo::find_by_id(&store, &request.id).is_none());
    assert!(!LeaveRequestRepo::delete(&store, &request.id));
}

#[test]
fn test_attendance_get_and_delete() {
    let (store, _) = store_at(9, 0);
    let row = AttendanceRepo::create(&store, absence("e1", day())).unwrap();
    assert_eq!(AttendanceRepo::find_by_id(&store, &row.id), Some(row.clone()));

    assert!(AttendanceRepo::delete(&store, &row.id));
    assert!(AttendanceRepo::find_by_id(&store, &row.id).is_none());
    assert!(!AttendanceRepo::delete(&store, &row.id));
}

#[test]
fn test_leave_requests_for_employee_newest_first() {
    let (store, clock) = store_at(9, 0);
    let first = LeaveRequestRepo::create(&store, new_leave("e1"));
    clock.advance(Duration::hours(1));
    LeaveRequestRepo::create(&store, new_leave("e2"));
    let third = LeaveRequestRepo::create(&store, new_leave("e1"));

    let ids: Vec<_> = LeaveRequestRepo::list_by_employee(&store, "e1")
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, [third.id, first.id]);
    assert_eq!(LeaveRequestRepo::list(&store).len(), 3);
}
