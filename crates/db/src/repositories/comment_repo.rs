//! Repository for the comment feed.

use prootly_core::types::new_record_id;

use crate::models::comment::{Comment, CreateComment};
use crate::store::MemStore;

/// Append-only: there is no update or delete.
pub struct CommentRepo;

impl CommentRepo {
    pub fn create(store: &MemStore, input: CreateComment) -> Comment {
        store.comments.insert(Comment {
            id: new_record_id(),
            author: input.author,
            company: input.company,
            text: input.text,
            created_at: store.now(),
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<Comment> {
        store.comments.get(id)
    }

    /// Newest first.
    pub fn list(store: &MemStore) -> Vec<Comment> {
        store.comments.list_recent()
    }
}
