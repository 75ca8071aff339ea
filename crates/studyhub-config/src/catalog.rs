//! Test catalog — maps short test identifiers to quiz JSON files.
//!
//! Built once at startup and never mutated afterwards; the only runtime
//! operation is [`TestCatalog::resolve`]. Paths are not checked against the
//! filesystem here: a dangling entry only surfaces when the browser fetches it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use studyhub_common::{Result, StudyhubError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestCatalog {
    entries: BTreeMap<String, String>,
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::from_entries([
            ("math_vvi", "data/most_save.json"),
            ("top_20", "data/top_20.json"),
            ("algebra", "data/algebra.json"),
            ("coordinate", "data/coordinate.json"),
        ])
    }
}

impl TestCatalog {
    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Exact-match lookup of a test id taken verbatim from the URL.
    pub fn resolve(&self, test_id: &str) -> Result<&str> {
        self.entries
            .get(test_id)
            .map(String::as_str)
            .ok_or_else(|| StudyhubError::TestNotFound(test_id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_id() {
        let catalog = TestCatalog::default();
        assert_eq!(catalog.resolve("math_vvi").unwrap(), "data/most_save.json");
        assert_eq!(catalog.resolve("coordinate").unwrap(), "data/coordinate.json");
    }

    #[test]
    fn test_resolve_unknown_id_is_not_found() {
        let catalog = TestCatalog::default();
        match catalog.resolve("biology") {
            Err(StudyhubError::TestNotFound(id)) => assert_eq!(id, "biology"),
            other => panic!("expected TestNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_is_exact_match() {
        let catalog = TestCatalog::default();
        assert!(catalog.resolve("MATH_VVI").is_err());
        assert!(catalog.resolve("math_vvi ").is_err());
        assert!(catalog.resolve("").is_err());
    }

    #[test]
    fn test_ids_are_sorted() {
        let catalog = TestCatalog::default();
        let ids: Vec<&str> = catalog.ids().collect();
        assert_eq!(ids, vec!["algebra", "coordinate", "math_vvi", "top_20"]);
        assert_eq!(catalog.len(), 4);
    }
}
