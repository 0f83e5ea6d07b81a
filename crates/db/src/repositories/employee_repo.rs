//! Repository for employees.

use prootly_core::error::CoreError;
use prootly_core::search::SearchQuery;
use prootly_core::status::DEFAULT_ACTIVE_STATUS;
use prootly_core::types::new_record_id;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::store::MemStore;

/// Provides CRUD and search for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the stored record.
    ///
    /// `status` defaults to `active`. Fails with [`CoreError::Conflict`] when
    /// another employee already uses the same email.
    pub fn create(store: &MemStore, input: CreateEmployee) -> Result<Employee, CoreError> {
        let now = store.now();
        store.employees.with_rows(|rows| {
            if rows.values().any(|e| e.email == input.email) {
                return Err(CoreError::Conflict(format!(
                    "An employee with email '{}' already exists",
                    input.email
                )));
            }
            let employee = Employee {
                id: new_record_id(),
                name: input.name,
                email: input.email,
                role: input.role,
                status: input
                    .status
                    .unwrap_or_else(|| DEFAULT_ACTIVE_STATUS.to_string()),
                profile_image: input.profile_image,
                created_at: now,
            };
            rows.insert(employee.id.clone(), employee.clone());
            Ok(employee)
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<Employee> {
        store.employees.get(id)
    }

    /// All employees in insertion order.
    pub fn list(store: &MemStore) -> Vec<Employee> {
        store.employees.list()
    }

    /// Update an employee. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no employee with the given `id` exists.
    pub fn update(store: &MemStore, id: &str, input: UpdateEmployee) -> Option<Employee> {
        store.employees.update(id, input, store.now())
    }

    /// Remove an employee. Attendance, leave and payroll rows that reference
    /// it are left in place.
    pub fn delete(store: &MemStore, id: &str) -> bool {
        store.employees.remove(id)
    }

    /// Case-insensitive substring match over name and email.
    ///
    /// The caller rejects empty queries.
    pub fn search(store: &MemStore, query: &str) -> Vec<Employee> {
        let query = SearchQuery::new(query);
        store
            .employees
            .filter(|e| query.matches_any([e.name.as_str(), e.email.as_str()]))
    }
}
