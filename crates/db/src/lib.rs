//! In-memory record store for the Prootly back office.
//!
//! Every entity kind lives in its own insertion-ordered [`table::Table`]
//! inside a single [`store::MemStore`]. Nothing is persisted: state is lost
//! when the process exits.

use std::sync::Arc;

use prootly_core::clock::{Clock, SystemClock};

pub mod models;
pub mod repositories;
pub mod store;
pub mod table;

pub use store::MemStore;

/// Shared handle to the store, cloned into every request handler.
pub type DbPool = Arc<MemStore>;

/// Create an empty store driven by the system clock.
pub fn create_pool() -> DbPool {
    Arc::new(MemStore::new(Arc::new(SystemClock)))
}

/// Create an empty store driven by the given clock.
pub fn create_pool_with_clock(clock: Arc<dyn Clock>) -> DbPool {
    Arc::new(MemStore::new(clock))
}
