use std::fmt;
use std::sync::Arc;

use prootly_core::clock::Clock;
use prootly_core::types::Timestamp;

use crate::models::attendance::Attendance;
use crate::models::client::Client;
use crate::models::comment::Comment;
use crate::models::department::Department;
use crate::models::employee::Employee;
use crate::models::leave_request::LeaveRequest;
use crate::models::payroll::Payroll;
use crate::models::planset::Planset;
use crate::models::project::Project;
use crate::models::user::User;
use crate::table::Table;

/// The process-resident record store.
///
/// Built once at startup and shared through `Arc`. Each entity kind has its
/// own lock, so writes to one collection never block another.
pub struct MemStore {
    clock: Arc<dyn Clock>,
    pub(crate) users: Table<User>,
    pub(crate) employees: Table<Employee>,
    pub(crate) clients: Table<Client>,
    pub(crate) projects: Table<Project>,
    pub(crate) comments: Table<Comment>,
    pub(crate) plansets: Table<Planset>,
    pub(crate) attendance: Table<Attendance>,
    pub(crate) leave_requests: Table<LeaveRequest>,
    pub(crate) departments: Table<Department>,
    pub(crate) payroll: Table<Payroll>,
}

impl MemStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            users: Table::new(),
            employees: Table::new(),
            clients: Table::new(),
            projects: Table::new(),
            comments: Table::new(),
            plansets: Table::new(),
            attendance: Table::new(),
            leave_requests: Table::new(),
            departments: Table::new(),
            payroll: Table::new(),
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Current instant as a UTC timestamp.
    pub fn now(&self) -> Timestamp {
        self.clock.timestamp()
    }

    /// Record counts per collection, used by the health endpoint.
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            users: self.users.len(),
            employees: self.employees.len(),
            clients: self.clients.len(),
            projects: self.projects.len(),
            comments: self.comments.len(),
            plansets: self.plansets.len(),
            attendance: self.attendance.len(),
            leave_requests: self.leave_requests.len(),
            departments: self.departments.len(),
            payroll: self.payroll.len(),
        }
    }
}

impl fmt::Debug for MemStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemStore")
            .field("counts", &self.counts())
            .finish_non_exhaustive()
    }
}

/// Number of records held in each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCounts {
    pub users: usize,
    pub employees: usize,
    pub clients: usize,
    pub projects: usize,
    pub comments: usize,
    pub plansets: usize,
    pub attendance: usize,
    pub leave_requests: usize,
    pub departments: usize,
    pub payroll: usize,
}

impl StoreCounts {
    pub fn total(&self) -> usize {
        self.users
            + self.employees
            + self.clients
            + self.projects
            + self.comments
            + self.plansets
            + self.attendance
            + self.leave_requests
            + self.departments
            + self.payroll
    }
}
