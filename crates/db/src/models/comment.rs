//! Activity-feed comment model. Comments are append-only.

use prootly_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::table::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: RecordId,
    pub author: String,
    pub company: Option<String>,
    pub text: String,
    pub created_at: Timestamp,
}

/// DTO for posting a comment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub company: Option<String>,
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}

impl Record for Comment {
    const ENTITY: &'static str = "Comment";

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
