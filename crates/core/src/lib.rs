//! Domain layer for the Prootly back office.
//!
//! Nothing in here performs I/O. The record store (`prootly-db`) and the
//! HTTP layer (`prootly-api`) both build on these types.

pub mod attendance;
pub mod clock;
pub mod error;
pub mod search;
pub mod stats;
pub mod status;
pub mod types;
