//! Leave request model and DTOs.

use prootly_core::status::LeaveStatus;
use prootly_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::double_option;
use crate::table::{apply_fields, Patch, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: RecordId,
    pub employee_id: RecordId,
    /// `vacation`, `sick`, `personal` or `emergency`.
    pub leave_type: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub days: i32,
    pub reason: String,
    pub status: LeaveStatus,
    /// Who made the decision (set for both approvals and rejections).
    pub approved_by: Option<String>,
    /// When the decision was made.
    pub approved_at: Option<Timestamp>,
    pub comments: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for filing a leave request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range"))]
pub struct CreateLeaveRequest {
    #[validate(length(min = 1, message = "employeeId must not be empty"))]
    pub employee_id: RecordId,
    #[validate(length(min = 1, message = "leaveType must not be empty"))]
    pub leave_type: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    #[validate(range(min = 0, message = "days must not be negative"))]
    pub days: i32,
    #[validate(length(min = 1, message = "reason must not be empty"))]
    pub reason: String,
    /// Defaults to `pending`.
    pub status: Option<LeaveStatus>,
    pub approved_by: Option<String>,
    pub approved_at: Option<Timestamp>,
    pub comments: Option<String>,
}

fn validate_date_range(input: &CreateLeaveRequest) -> Result<(), ValidationError> {
    if input.end_date < input.start_date {
        let mut err = ValidationError::new("date_range");
        err.message = Some("endDate must not be before startDate".into());
        return Err(err);
    }
    Ok(())
}

/// DTO for editing a leave request. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLeaveRequest {
    pub employee_id: Option<RecordId>,
    pub leave_type: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    #[validate(range(min = 0, message = "days must not be negative"))]
    pub days: Option<i32>,
    pub reason: Option<String>,
    pub status: Option<LeaveStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub approved_by: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub approved_at: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "double_option")]
    pub comments: Option<Option<String>>,
}

/// Body of the approve / reject endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecision {
    pub approved_by: Option<String>,
    pub comments: Option<String>,
}

impl Record for LeaveRequest {
    const ENTITY: &'static str = "LeaveRequest";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Patch<LeaveRequest> for UpdateLeaveRequest {
    fn apply(self, request: &mut LeaveRequest) {
        let patch = self;
        apply_fields!(patch => request {
            employee_id,
            leave_type,
            start_date,
            end_date,
            days,
            reason,
            status,
            approved_by,
            approved_at,
            comments,
        });
    }
}
