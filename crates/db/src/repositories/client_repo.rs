//! Repository for client companies.

use prootly_core::search::SearchQuery;
use prootly_core::status::DEFAULT_ACTIVE_STATUS;
use prootly_core::types::new_record_id;

use crate::models::client::{Client, CreateClient, UpdateClient};
use crate::store::MemStore;

/// Provides CRUD and search for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client. `status` defaults to `active`.
    pub fn create(store: &MemStore, input: CreateClient) -> Client {
        store.clients.insert(Client {
            id: new_record_id(),
            company_name: input.company_name,
            contact_person: input.contact_person,
            email: input.email,
            phone: input.phone,
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_ACTIVE_STATUS.to_string()),
            notes: input.notes,
            created_at: store.now(),
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<Client> {
        store.clients.get(id)
    }

    pub fn list(store: &MemStore) -> Vec<Client> {
        store.clients.list()
    }

    /// Returns `None` if no client with the given `id` exists.
    pub fn update(store: &MemStore, id: &str, input: UpdateClient) -> Option<Client> {
        store.clients.update(id, input, store.now())
    }

    /// Projects pointing at the client keep their `client_id`.
    pub fn delete(store: &MemStore, id: &str) -> bool {
        store.clients.remove(id)
    }

    /// Case-insensitive substring match over company name, contact person
    /// and email.
    pub fn search(store: &MemStore, query: &str) -> Vec<Client> {
        let query = SearchQuery::new(query);
        store.clients.filter(|c| {
            query.matches_any([
                c.company_name.as_str(),
                c.contact_person.as_str(),
                c.email.as_str(),
            ])
        })
    }
}
