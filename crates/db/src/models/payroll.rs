//! Monthly payroll model and DTOs.
//!
//! Amounts are whole currency units.

use prootly_core::status::PayrollStatus;
use prootly_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::double_option;
use crate::table::{apply_fields, Patch, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: RecordId,
    pub employee_id: RecordId,
    /// `YYYY-MM`.
    pub month: String,
    pub basic_salary: i64,
    pub allowances: i64,
    pub deductions: i64,
    pub bonus: i64,
    pub overtime: i64,
    pub gross_salary: i64,
    pub net_salary: i64,
    pub status: PayrollStatus,
    pub processed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for creating a payroll entry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayroll {
    #[validate(length(min = 1, message = "employeeId must not be empty"))]
    pub employee_id: RecordId,
    #[validate(custom(function = "validate_month"))]
    pub month: String,
    #[validate(range(min = 0, message = "basicSalary must not be negative"))]
    pub basic_salary: i64,
    /// Defaults to `0`.
    pub allowances: Option<i64>,
    /// Defaults to `0`.
    pub deductions: Option<i64>,
    /// Defaults to `0`.
    pub bonus: Option<i64>,
    /// Defaults to `0`.
    pub overtime: Option<i64>,
    pub gross_salary: i64,
    pub net_salary: i64,
    /// Defaults to `pending`.
    pub status: Option<PayrollStatus>,
    pub processed_at: Option<Timestamp>,
}

/// DTO for updating a payroll entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayroll {
    pub employee_id: Option<RecordId>,
    #[validate(custom(function = "validate_month"))]
    pub month: Option<String>,
    pub basic_salary: Option<i64>,
    pub allowances: Option<i64>,
    pub deductions: Option<i64>,
    pub bonus: Option<i64>,
    pub overtime: Option<i64>,
    pub gross_salary: Option<i64>,
    pub net_salary: Option<i64>,
    pub status: Option<PayrollStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub processed_at: Option<Option<Timestamp>>,
}

/// `month` must look like `2025-07`.
fn validate_month(month: &str) -> Result<(), ValidationError> {
    let valid = month.len() == 7
        && chrono::NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").is_ok();
    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("month");
        err.message = Some("month must be formatted as YYYY-MM".into());
        Err(err)
    }
}

impl Record for Payroll {
    const ENTITY: &'static str = "Payroll";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Patch<Payroll> for UpdatePayroll {
    fn apply(self, payroll: &mut Payroll) {
        let patch = self;
        apply_fields!(patch => payroll {
            employee_id,
            month,
            basic_salary,
            allowances,
            deductions,
            bonus,
            overtime,
            gross_salary,
            net_salary,
            status,
            processed_at,
        });
    }
}
