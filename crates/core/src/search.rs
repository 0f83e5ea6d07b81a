//! Case-insensitive substring search helpers.
//!
//! Callers reject an empty query before searching; an empty needle would
//! otherwise match every record.

/// A lowercased search needle.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// True when `field` contains the query, ignoring case.
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.needle)
    }

    /// True when any of `fields` contains the query.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        fields.into_iter().any(|f| self.matches(f))
    }
}

/// Accept a raw `?q=` parameter unless it is missing or blank.
///
/// The query itself is passed through untrimmed.
pub fn normalize_query(raw: Option<&str>) -> Option<&str> {
    raw.filter(|q| !q.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ignores_case() {
        let q = SearchQuery::new("green");
        assert!(q.matches("Green Energy Solutions"));
        assert!(q.matches("EVERGREEN"));
        assert!(!q.matches("Solar Dynamics"));
    }

    #[test]
    fn matches_any_field() {
        let q = SearchQuery::new("LISA");
        assert!(q.matches_any(["Solar Dynamics", "Lisa Davis"]));
        assert!(!q.matches_any(["Solar Dynamics", "Michael Brown"]));
    }

    #[test]
    fn blank_query_is_rejected() {
        assert_eq!(normalize_query(None), None);
        assert_eq!(normalize_query(Some("   ")), None);
        assert_eq!(normalize_query(Some("sun ")), Some("sun "));
    }
}
