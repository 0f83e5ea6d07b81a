//! Employee entity model and DTOs.

use prootly_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::double_option;
use crate::table::{apply_fields, Patch, Record};

/// An employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    /// Unique across employees at creation time.
    pub email: String,
    pub role: String,
    pub status: String,
    pub profile_image: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new employee.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "role must not be empty"))]
    pub role: String,
    /// Defaults to `active` if omitted.
    pub status: Option<String>,
    pub profile_image: Option<String>,
}

/// DTO for updating an existing employee. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub profile_image: Option<Option<String>>,
}

impl Record for Employee {
    const ENTITY: &'static str = "Employee";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Patch<Employee> for UpdateEmployee {
    fn apply(self, employee: &mut Employee) {
        let patch = self;
        apply_fields!(patch => employee { name, email, role, status, profile_image });
    }
}
