//! Repository for payroll entries.

use prootly_core::types::new_record_id;

use crate::models::payroll::{CreatePayroll, Payroll, UpdatePayroll};
use crate::store::MemStore;

pub struct PayrollRepo;

impl PayrollRepo {
    /// Insert a payroll entry. Optional amounts default to `0` and `status`
    /// to `pending`. Nothing stops two entries for the same employee and month.
    pub fn create(store: &MemStore, input: CreatePayroll) -> Payroll {
        store.payroll.insert(Payroll {
            id: new_record_id(),
            employee_id: input.employee_id,
            month: input.month,
            basic_salary: input.basic_salary,
            allowances: input.allowances.unwrap_or(0),
            deductions: input.deductions.unwrap_or(0),
            bonus: input.bonus.unwrap_or(0),
            overtime: input.overtime.unwrap_or(0),
            gross_salary: input.gross_salary,
            net_salary: input.net_salary,
            status: input.status.unwrap_or_default(),
            processed_at: input.processed_at,
            created_at: store.now(),
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<Payroll> {
        store.payroll.get(id)
    }

    /// Newest first.
    pub fn list(store: &MemStore) -> Vec<Payroll> {
        store.payroll.list_recent()
    }

    /// One employee's entries, newest first.
    pub fn list_by_employee(store: &MemStore, employee_id: &str) -> Vec<Payroll> {
        store.payroll.filter_recent(|p| p.employee_id == employee_id)
    }

    pub fn update(store: &MemStore, id: &str, input: UpdatePayroll) -> Option<Payroll> {
        store.payroll.update(id, input, store.now())
    }

    pub fn delete(store: &MemStore, id: &str) -> bool {
        store.payroll.remove(id)
    }
}
