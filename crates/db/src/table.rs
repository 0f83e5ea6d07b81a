//! Generic keyed collection shared by every entity kind.
//!
//! A [`Table`] is an insertion-ordered map from record id to record, guarded
//! by a read/write lock. Repositories layer entity-specific defaults and
//! filters on top; the create/get/update/delete contract lives here once.

use chrono::Duration;
use indexmap::IndexMap;
use parking_lot::RwLock;
use prootly_core::types::{RecordId, Timestamp};

/// A stored entity.
pub trait Record: Clone {
    /// Human-readable entity name used in not-found errors.
    const ENTITY: &'static str;

    fn id(&self) -> &str;

    fn created_at(&self) -> Timestamp;

    /// The last-modified stamp, for entities that track one.
    fn updated_at(&self) -> Option<Timestamp> {
        None
    }

    /// Refresh the last-modified stamp. No-op for entities without one.
    fn touch(&mut self, _at: Timestamp) {}
}

/// A partial update: only the fields it carries are written.
pub trait Patch<T> {
    fn apply(self, record: &mut T);
}

/// Copy every `Some` field of a patch onto the record.
///
/// Nullable record fields take `Option<Option<_>>` patch fields, so an
/// explicit `null` clears the value while an absent key leaves it alone.
macro_rules! apply_fields {
    ($patch:ident => $record:ident { $($field:ident),* $(,)? }) => {
        $(
            if let Some(value) = $patch.$field {
                $record.$field = value;
            }
        )*
    };
}
pub(crate) use apply_fields;

/// Pick the next update stamp so that it is strictly later than the last one,
/// even when two writes land within the same clock tick.
pub fn next_stamp(previous: Option<Timestamp>, now: Timestamp) -> Timestamp {
    match previous {
        Some(prev) if now <= prev => prev + Duration::microseconds(1),
        _ => now,
    }
}

/// Insertion-ordered, lock-guarded collection of one entity kind.
#[derive(Debug)]
pub struct Table<T> {
    rows: RwLock<IndexMap<RecordId, T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(IndexMap::new()),
        }
    }
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly built record and hand back a copy.
    pub fn insert(&self, record: T) -> T {
        self.rows
            .write()
            .insert(record.id().to_string(), record.clone());
        record
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.rows.read().get(id).cloned()
    }

    /// Merge `patch` over the record and refresh its update stamp.
    ///
    /// Returns `None` if no record with `id` exists.
    pub fn update<P: Patch<T>>(&self, id: &str, patch: P, now: Timestamp) -> Option<T> {
        self.modify(id, now, |record| patch.apply(record))
    }

    /// Run `f` against the stored record and refresh its update stamp.
    pub fn modify<F>(&self, id: &str, now: Timestamp, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.rows.write();
        let record = rows.get_mut(id)?;
        f(record);
        let stamp = next_stamp(record.updated_at(), now);
        record.touch(stamp);
        Some(record.clone())
    }

    /// Remove a record. Returns `true` if it existed.
    pub fn remove(&self, id: &str) -> bool {
        self.rows.write().shift_remove(id).is_some()
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.rows.read().values().cloned().collect()
    }

    /// All records, most recently created first.
    pub fn list_recent(&self) -> Vec<T> {
        self.filter_recent(|_| true)
    }

    /// Records matching `predicate`, in insertion order.
    pub fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Records matching `predicate`, most recently created first.
    ///
    /// Equal creation stamps fall back to reverse insertion order, so the
    /// later insert is treated as the more recent one.
    pub fn filter_recent<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let mut out: Vec<T> = self
            .rows
            .read()
            .values()
            .rev()
            .filter(|r| predicate(r))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        out
    }

    /// First record (in insertion order) matching `predicate`.
    pub fn find<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows.read().values().find(|r| predicate(r)).cloned()
    }

    /// Run `f` with exclusive access to the rows.
    ///
    /// Used for check-then-act sequences (uniqueness checks, punch-in) that
    /// must not interleave with other writers.
    pub fn with_rows<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut IndexMap<RecordId, T>) -> R,
    {
        f(&mut self.rows.write())
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        body: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    }

    impl Record for Note {
        const ENTITY: &'static str = "Note";

        fn id(&self) -> &str {
            &self.id
        }

        fn created_at(&self) -> Timestamp {
            self.created_at
        }

        fn updated_at(&self) -> Option<Timestamp> {
            Some(self.updated_at)
        }

        fn touch(&mut self, at: Timestamp) {
            self.updated_at = at;
        }
    }

    struct SetBody(Option<String>);

    impl Patch<Note> for SetBody {
        fn apply(self, record: &mut Note) {
            if let Some(body) = self.0 {
                record.body = body;
            }
        }
    }

    fn at(secs: i64) -> Timestamp {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn note(id: &str, created: i64) -> Note {
        Note {
            id: id.to_string(),
            body: String::new(),
            created_at: at(created),
            updated_at: at(created),
        }
    }

    #[test]
    fn recent_first_orders_by_creation_desc() {
        let table = Table::new();
        table.insert(note("a", 1));
        table.insert(note("b", 3));
        table.insert(note("c", 2));
        let ids: Vec<_> = table.list_recent().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn recent_first_breaks_ties_by_later_insert() {
        let table = Table::new();
        table.insert(note("a", 5));
        table.insert(note("b", 5));
        table.insert(note("c", 5));
        let ids: Vec<_> = table.list_recent().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn remove_keeps_insertion_order_of_the_rest() {
        let table = Table::new();
        table.insert(note("a", 1));
        table.insert(note("b", 2));
        table.insert(note("c", 3));
        assert!(table.remove("b"));
        assert!(!table.remove("b"));
        let ids: Vec<_> = table.list().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn update_stamp_strictly_increases_within_one_tick() {
        let table = Table::new();
        table.insert(note("a", 10));
        let first = table.update("a", SetBody(Some("x".into())), at(10)).unwrap();
        let second = table.update("a", SetBody(None), at(10)).unwrap();
        assert!(first.updated_at > at(10));
        assert!(second.updated_at > first.updated_at);
        assert_eq!(second.body, "x");
    }

    #[test]
    fn update_of_missing_id_is_none() {
        let table: Table<Note> = Table::new();
        assert!(table.update("nope", SetBody(None), at(0)).is_none());
    }
}
