//! Repository layer.
//!
//! Each repository is a zero-sized struct providing CRUD methods that accept
//! `&MemStore` as the first argument. Lookups of a missing id return `None`
//! and deletes report whether anything was removed; only business-rule
//! violations come back as `CoreError`.

pub mod attendance_repo;
pub mod client_repo;
pub mod comment_repo;
pub mod department_repo;
pub mod employee_repo;
pub mod leave_request_repo;
pub mod payroll_repo;
pub mod planset_repo;
pub mod project_repo;
pub mod user_repo;

pub use attendance_repo::AttendanceRepo;
pub use client_repo::ClientRepo;
pub use comment_repo::CommentRepo;
pub use department_repo::DepartmentRepo;
pub use employee_repo::EmployeeRepo;
pub use leave_request_repo::LeaveRequestRepo;
pub use payroll_repo::PayrollRepo;
pub use planset_repo::PlansetRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
