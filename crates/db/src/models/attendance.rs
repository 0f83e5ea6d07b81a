//! Daily attendance model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use prootly_core::attendance::hh_mm;
use prootly_core::status::AttendanceStatus;
use prootly_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::double_option;
use crate::table::{apply_fields, Patch, Record};

/// One employee's attendance for one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: RecordId,
    pub employee_id: RecordId,
    /// `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// `HH:MM`.
    #[serde(default, with = "hh_mm")]
    pub punch_in: Option<NaiveTime>,
    /// `HH:MM`.
    #[serde(default, with = "hh_mm")]
    pub punch_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    /// Worked minutes (despite the name). Negative for shifts that cross midnight.
    pub working_hours: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording attendance directly (outside punch-in / punch-out).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendance {
    #[validate(length(min = 1, message = "employeeId must not be empty"))]
    pub employee_id: RecordId,
    pub date: NaiveDate,
    #[serde(default, with = "hh_mm")]
    pub punch_in: Option<NaiveTime>,
    #[serde(default, with = "hh_mm")]
    pub punch_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    /// Defaults to `0`.
    pub working_hours: Option<i32>,
    pub notes: Option<String>,
}

/// DTO for correcting an attendance row. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendance {
    pub employee_id: Option<RecordId>,
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "hh_mm::deserialize_present")]
    pub punch_in: Option<Option<NaiveTime>>,
    #[serde(default, deserialize_with = "hh_mm::deserialize_present")]
    pub punch_out: Option<Option<NaiveTime>>,
    pub status: Option<AttendanceStatus>,
    pub working_hours: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

impl Record for Attendance {
    const ENTITY: &'static str = "Attendance";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Option<Timestamp> {
        Some(self.updated_at)
    }

    fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}

impl Patch<Attendance> for UpdateAttendance {
    fn apply(self, attendance: &mut Attendance) {
        let patch = self;
        apply_fields!(patch => attendance {
            employee_id,
            date,
            punch_in,
            punch_out,
            status,
            working_hours,
            notes,
        });
    }
}
