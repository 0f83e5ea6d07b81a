//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as stored and returned to clients
//! - A `Deserialize` + `Validate` create DTO; omitted optional fields take
//!   the defaults applied by the matching repository
//! - A `Deserialize` update DTO (all `Option` fields) implementing
//!   [`Patch`](crate::table::Patch)
//!
//! Everything is camelCase on the wire.

use serde::{Deserialize, Deserializer};

pub mod attendance;
pub mod client;
pub mod comment;
pub mod department;
pub mod employee;
pub mod leave_request;
pub mod payroll;
pub mod planset;
pub mod project;
pub mod user;

/// Deserialize a nullable patch field so that a present key, even `null`,
/// becomes `Some(..)`. Pair with `#[serde(default)]` so an absent key stays
/// `None`.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
