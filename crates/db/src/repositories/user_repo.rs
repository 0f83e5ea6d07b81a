//! Repository for login accounts.

use prootly_core::types::new_record_id;

use crate::models::user::{CreateUser, User};
use crate::store::MemStore;

pub struct UserRepo;

impl UserRepo {
    pub fn create(store: &MemStore, input: CreateUser) -> User {
        store.users.insert(User {
            id: new_record_id(),
            username: input.username,
            password: input.password,
            created_at: store.now(),
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<User> {
        store.users.get(id)
    }

    /// Exact, case-sensitive username lookup.
    pub fn find_by_username(store: &MemStore, username: &str) -> Option<User> {
        store.users.find(|u| u.username == username)
    }
}
