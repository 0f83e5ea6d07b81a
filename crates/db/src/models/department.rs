//! Department model and DTOs.

use prootly_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::double_option;
use crate::table::{apply_fields, Patch, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: RecordId,
    /// Unique across departments at creation time.
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<RecordId>,
    pub budget: i64,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a department.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub manager_id: Option<RecordId>,
    /// Defaults to `0`.
    #[validate(range(min = 0, message = "budget must not be negative"))]
    pub budget: Option<i64>,
    /// Defaults to `active`.
    pub status: Option<String>,
}

/// DTO for updating a department. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartment {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub manager_id: Option<Option<RecordId>>,
    #[validate(range(min = 0, message = "budget must not be negative"))]
    pub budget: Option<i64>,
    pub status: Option<String>,
}

impl Record for Department {
    const ENTITY: &'static str = "Department";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Patch<Department> for UpdateDepartment {
    fn apply(self, department: &mut Department) {
        let patch = self;
        apply_fields!(patch => department { name, description, manager_id, budget, status });
    }
}
