//! Repository for leave requests and their approval workflow.

use prootly_core::status::LeaveStatus;
use prootly_core::types::new_record_id;

use crate::models::leave_request::{CreateLeaveRequest, LeaveRequest, UpdateLeaveRequest};
use crate::store::MemStore;

pub struct LeaveRequestRepo;

impl LeaveRequestRepo {
    /// File a request. `status` defaults to `pending`.
    pub fn create(store: &MemStore, input: CreateLeaveRequest) -> LeaveRequest {
        store.leave_requests.insert(LeaveRequest {
            id: new_record_id(),
            employee_id: input.employee_id,
            leave_type: input.leave_type,
            start_date: input.start_date,
            end_date: input.end_date,
            days: input.days,
            reason: input.reason,
            status: input.status.unwrap_or_default(),
            approved_by: input.approved_by,
            approved_at: input.approved_at,
            comments: input.comments,
            created_at: store.now(),
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<LeaveRequest> {
        store.leave_requests.get(id)
    }

    /// Newest first.
    pub fn list(store: &MemStore) -> Vec<LeaveRequest> {
        store.leave_requests.list_recent()
    }

    /// One employee's requests, newest first.
    pub fn list_by_employee(store: &MemStore, employee_id: &str) -> Vec<LeaveRequest> {
        store
            .leave_requests
            .filter_recent(|r| r.employee_id == employee_id)
    }

    pub fn update(
        store: &MemStore,
        id: &str,
        input: UpdateLeaveRequest,
    ) -> Option<LeaveRequest> {
        store.leave_requests.update(id, input, store.now())
    }

    pub fn delete(store: &MemStore, id: &str) -> bool {
        store.leave_requests.remove(id)
    }

    /// Mark the request approved by `approved_by` as of now.
    ///
    /// Already-decided requests are overwritten; the last decision wins.
    pub fn approve(store: &MemStore, id: &str, approved_by: &str) -> Option<LeaveRequest> {
        let now = store.now();
        store.leave_requests.modify(id, now, |request| {
            request.status = LeaveStatus::Approved;
            request.approved_by = Some(approved_by.to_string());
            request.approved_at = Some(now);
        })
    }

    /// Mark the request rejected, storing the reviewer's comments.
    ///
    /// `comments` replaces any earlier value, including with `None`.
    pub fn reject(
        store: &MemStore,
        id: &str,
        approved_by: &str,
        comments: Option<String>,
    ) -> Option<LeaveRequest> {
        let now = store.now();
        store.leave_requests.modify(id, now, |request| {
            request.status = LeaveStatus::Rejected;
            request.approved_by = Some(approved_by.to_string());
            request.approved_at = Some(now);
            request.comments = comments;
        })
    }
}
