//! Request handlers, one module per resource.
//!
//! Handlers validate the payload, call the matching repository and map a
//! missing record to 404.

pub mod attendance;
pub mod client;
pub mod comment;
pub mod department;
pub mod employee;
pub mod leave_request;
pub mod payroll;
pub mod planset;
pub mod project;

use prootly_core::error::CoreError;
use prootly_db::table::Record;

use crate::error::AppError;

/// 404 for a record of type `T` that does not exist.
pub(crate) fn not_found<T: Record>(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: T::ENTITY,
        id: id.to_string(),
    })
}

/// Pull a required, non-blank field out of a loosely typed request body.
pub(crate) fn required_field(value: Option<String>, name: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("{name} is required")))
}
