//! Shared query parameter types for API handlers.

use chrono::NaiveDate;
use prootly_core::search::normalize_query;
use serde::Deserialize;

use crate::error::AppError;

/// `?q=` for the search endpoints.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The query text, or a 400 when it is missing or blank.
    pub fn required(&self) -> Result<&str, AppError> {
        normalize_query(self.q.as_deref())
            .ok_or_else(|| AppError::BadRequest("Search query is required".to_string()))
    }
}

/// `?status=` filter on project listing.
#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

/// `?date=YYYY-MM-DD` filter on attendance listing.
#[derive(Debug, Deserialize)]
pub struct DateFilter {
    pub date: Option<NaiveDate>,
}
