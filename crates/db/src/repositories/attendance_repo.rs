//! Repository for attendance rows, including punch-in / punch-out.

use chrono::{NaiveDate, Utc};
use indexmap::IndexMap;
use prootly_core::attendance::{working_minutes, AttendanceError, PunchState};
use prootly_core::clock::truncate_to_minute;
use prootly_core::error::CoreError;
use prootly_core::status::AttendanceStatus;
use prootly_core::types::{new_record_id, RecordId};

use crate::models::attendance::{Attendance, CreateAttendance, UpdateAttendance};
use crate::store::MemStore;
use crate::table::{next_stamp, Patch};

/// Fail if a row other than `except` already covers `(employee_id, date)`.
fn ensure_day_free(
    rows: &IndexMap<RecordId, Attendance>,
    employee_id: &str,
    date: NaiveDate,
    except: Option<&str>,
) -> Result<(), CoreError> {
    let taken = rows.values().any(|a| {
        a.employee_id == employee_id && a.date == date && Some(a.id.as_str()) != except
    });
    if taken {
        return Err(CoreError::Conflict(format!(
            "Attendance for employee '{employee_id}' on {date} already exists"
        )));
    }
    Ok(())
}

pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Record a day directly, e.g. an absence entered by an administrator.
    /// `working_hours` defaults to `0`.
    ///
    /// Fails with [`CoreError::Conflict`] when the employee already has a row
    /// for that date.
    pub fn create(store: &MemStore, input: CreateAttendance) -> Result<Attendance, CoreError> {
        let now = store.now();
        store.attendance.with_rows(|rows| {
            ensure_day_free(rows, &input.employee_id, input.date, None)?;
            let attendance = Attendance {
                id: new_record_id(),
                employee_id: input.employee_id,
                date: input.date,
                punch_in: input.punch_in,
                punch_out: input.punch_out,
                status: input.status,
                working_hours: input.working_hours.unwrap_or(0),
                notes: input.notes,
                created_at: now,
                updated_at: now,
            };
            rows.insert(attendance.id.clone(), attendance.clone());
            Ok(attendance)
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<Attendance> {
        store.attendance.get(id)
    }

    /// Newest first.
    pub fn list(store: &MemStore) -> Vec<Attendance> {
        store.attendance.list_recent()
    }

    /// One employee's rows, newest first.
    pub fn list_by_employee(store: &MemStore, employee_id: &str) -> Vec<Attendance> {
        store
            .attendance
            .filter_recent(|a| a.employee_id == employee_id)
    }

    /// Every employee's row for one calendar day, newest first.
    pub fn list_by_date(store: &MemStore, date: NaiveDate) -> Vec<Attendance> {
        store.attendance.filter_recent(|a| a.date == date)
    }

    /// The employee's row for the server's current local date, if any.
    pub fn find_today(store: &MemStore, employee_id: &str) -> Option<Attendance> {
        let today = store.clock().today();
        store
            .attendance
            .find(|a| a.employee_id == employee_id && a.date == today)
    }

    /// Manual correction of a row. Refreshes `updated_at`.
    ///
    /// Returns `Ok(None)` for an unknown id and [`CoreError::Conflict`] when
    /// the patch would move the row onto an employee/date pair that already
    /// has one.
    pub fn update(
        store: &MemStore,
        id: &str,
        input: UpdateAttendance,
    ) -> Result<Option<Attendance>, CoreError> {
        let now = store.now();
        store.attendance.with_rows(|rows| {
            let Some(current) = rows.get(id) else {
                return Ok(None);
            };
            let employee_id = input
                .employee_id
                .clone()
                .unwrap_or_else(|| current.employee_id.clone());
            let date = input.date.unwrap_or(current.date);
            ensure_day_free(rows, &employee_id, date, Some(id))?;

            let Some(attendance) = rows.get_mut(id) else {
                return Ok(None);
            };
            input.apply(attendance);
            attendance.updated_at = next_stamp(Some(attendance.updated_at), now);
            Ok(Some(attendance.clone()))
        })
    }

    pub fn delete(store: &MemStore, id: &str) -> bool {
        store.attendance.remove(id)
    }

    /// Open today's row for the employee with the current wall time.
    ///
    /// Fails with "already punched in" if any row exists for today, punched
    /// out or not. The lookup and the insert happen under one write lock.
    pub fn punch_in(store: &MemStore, employee_id: &str) -> Result<Attendance, CoreError> {
        let instant = store.clock().now();
        let today = instant.date_naive();
        let punch_in = truncate_to_minute(instant.time());
        let now = instant.with_timezone(&Utc);

        store.attendance.with_rows(|rows| {
            let existing = rows
                .values()
                .find(|a| a.employee_id == employee_id && a.date == today);
            PunchState::from_times(existing.is_some(), existing.and_then(|a| a.punch_out))
                .check_punch_in()?;

            let attendance = Attendance {
                id: new_record_id(),
                employee_id: employee_id.to_string(),
                date: today,
                punch_in: Some(punch_in),
                punch_out: None,
                status: AttendanceStatus::Present,
                working_hours: 0,
                notes: None,
                created_at: now,
                updated_at: now,
            };
            rows.insert(attendance.id.clone(), attendance.clone());
            Ok(attendance)
        })
    }

    /// Close today's row and record the worked minutes.
    ///
    /// Fails with "no punch-in found" if there is no row for today or the
    /// row has no punch-in time. A second punch-out overwrites the first.
    pub fn punch_out(store: &MemStore, employee_id: &str) -> Result<Attendance, CoreError> {
        let instant = store.clock().now();
        let today = instant.date_naive();
        let punch_out = truncate_to_minute(instant.time());
        let now = instant.with_timezone(&Utc);

        store.attendance.with_rows(|rows| {
            let attendance = rows
                .values_mut()
                .find(|a| a.employee_id == employee_id && a.date == today)
                .ok_or(AttendanceError::NoPunchIn)?;
            let punch_in = attendance.punch_in.ok_or(AttendanceError::NoPunchIn)?;

            attendance.punch_out = Some(punch_out);
            attendance.working_hours = working_minutes(punch_in, punch_out);
            attendance.updated_at = next_stamp(Some(attendance.updated_at), now);
            Ok(attendance.clone())
        })
    }
}
