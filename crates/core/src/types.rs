/// Record identifiers are opaque strings holding a random UUID v4.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh record identifier.
///
/// Backed by a random v4 UUID so identifiers stay unique without any
/// process-local counter.
pub fn new_record_id() -> RecordId {
    uuid::Uuid::new_v4().to_string()
}
