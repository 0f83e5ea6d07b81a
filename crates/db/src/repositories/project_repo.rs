//! Repository for projects.

use std::str::FromStr;

use prootly_core::stats::ProjectStats;
use prootly_core::status::ProjectStatus;
use prootly_core::types::new_record_id;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::store::MemStore;

/// Provides CRUD, status filtering and statistics for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    pub fn create(store: &MemStore, input: CreateProject) -> Project {
        store.projects.insert(Project {
            id: new_record_id(),
            name: input.name,
            status: input.status,
            client_id: input.client_id,
            created_at: store.now(),
        })
    }

    pub fn find_by_id(store: &MemStore, id: &str) -> Option<Project> {
        store.projects.get(id)
    }

    /// All projects in insertion order.
    pub fn list(store: &MemStore) -> Vec<Project> {
        store.projects.list()
    }

    /// Projects whose status equals `status`.
    ///
    /// A value outside the known status set matches nothing.
    pub fn list_by_status(store: &MemStore, status: &str) -> Vec<Project> {
        match ProjectStatus::from_str(status) {
            Ok(wanted) => store.projects.filter(|p| p.status == wanted),
            Err(_) => Vec::new(),
        }
    }

    pub fn update(store: &MemStore, id: &str, input: UpdateProject) -> Option<Project> {
        store.projects.update(id, input, store.now())
    }

    /// Plansets referencing the project are not removed.
    pub fn delete(store: &MemStore, id: &str) -> bool {
        store.projects.remove(id)
    }

    /// Totals per status across every project.
    pub fn stats(store: &MemStore) -> ProjectStats {
        ProjectStats::from_statuses(store.projects.list().into_iter().map(|p| p.status))
    }
}
