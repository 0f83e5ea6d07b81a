#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A caller-correctable business rule was broken (e.g. a second
    /// punch-in on the same day).
    #[error("{0}")]
    InvariantViolation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<crate::attendance::AttendanceError> for CoreError {
    fn from(err: crate::attendance::AttendanceError) -> Self {
        CoreError::InvariantViolation(err.to_string())
    }
}
