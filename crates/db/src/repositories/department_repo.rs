//! Repository for departments.

use prootly_core::error::CoreError;
use prootly_core::status::DEFAULT_ACTIVE_STATUS;
use prootly_core::types::new_record_id;

use crate::models::department::{CreateDepartment, Department, UpdateDepartment};
use crate::store::MemStore;

pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a department. `budget` defaults to `0` and `status` to `active`.
    ///
    /// Fails with [`CoreError::Conflict`] when the name is already taken.
    pub fn create(store: &MemStore, input: CreateDepartment) -> Result<Department, CoreError> {
        let now = store.now();
        store.departments.with_rows(|rows| {
            if rows.values().any(|d| d.name == input.name) {
                return Err(CoreError::Conflict(format!(
                    "A department named '{}' already exists",
                    input.name
                )));
            }
            let department = Department {
                id: new_record_id(),
                name: input.name,
                description: input.description,
                manager_id: input.manager_id,
                budget: input.budget.unwrap_or(0),
                status: input
                    .status
                    .unwrap_or_else(|| DEFAULT_ACTIVE_STATUS.to_string()),
                created_at: now,
            };
            rows.insert(department.id.clone(), department.clone());
            Ok(department)
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<Department> {
        store.departments.get(id)
    }

    pub fn list(store: &MemStore) -> Vec<Department> {
        store.departments.list()
    }

    pub fn update(store: &MemStore, id: &str, input: UpdateDepartment) -> Option<Department> {
        store.departments.update(id, input, store.now())
    }

    pub fn delete(store: &MemStore, id: &str) -> bool {
        store.departments.remove(id)
    }
}
