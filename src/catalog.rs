//! Record catalog
//!
//! The catalog is built once at startup, either from the built-in sample or
//! from a JSON file, and is read-only afterwards.

use crate::error::{HiliteError, Result};
use crate::logging;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A single searchable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub description: String,
}

impl Record {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

const SAMPLE: [(&str, &str); 5] = [
    (
        "Test 1",
        "Test 1. Lorem ipsum dolor sit amet consectetur adipisicing elit.",
    ),
    ("Test 2", "Test 2. Vel dicta exercitationem cum deserunt."),
    (
        "Test 3",
        "Test 3. Enim, nemo minima suscipit sunt perspiciatis odit.",
    ),
    (
        "Test 4",
        "Test 4. Beatae animi, odio distinctio modi non obcaecati a fuga deserunt, praesentium iste explicabo architecto.",
    ),
    (
        "Test 5",
        "Test 5. Laborum soluta explicabo, quod doloribus delectus, ab aspernatur, corrupti eligendi earum nam sint itaque rerum dicta.",
    ),
];

/// Non-empty, ordered, immutable collection of records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty record list
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(HiliteError::EmptyCatalog);
        }
        Ok(Self { records })
    }

    /// The built-in five record demo catalog
    pub fn sample() -> Self {
        let records = SAMPLE
            .iter()
            .map(|(title, description)| Record::new(*title, *description))
            .collect();
        Self { records }
    }

    /// Load a catalog from a JSON array of `{ "title", "description" }`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| HiliteError::CatalogRead {
                path: path.to_path_buf(),
                source,
            })?;
        let records: Vec<Record> =
            serde_json::from_str(&contents).map_err(|source| HiliteError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::new(records)?;
        logging::log_catalog_loaded(
            &path.display().to_string(),
            catalog.len(),
            &catalog.duplicate_titles(),
        );
        Ok(catalog)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Titles that appear more than once, in first-repeat order.
    /// Titles are treated as display keys but uniqueness is not enforced.
    pub fn duplicate_titles(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for record in &self.records {
            if !seen.insert(record.title.as_str()) && !dupes.contains(&record.title) {
                dupes.push(record.title.clone());
            }
        }
        dupes
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sample_has_five_records_in_order() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 5);
        let titles: Vec<_> = catalog.records().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Test 1", "Test 2", "Test 3", "Test 4", "Test 5"]);
        assert!(catalog.duplicate_titles().is_empty());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(Catalog::new(Vec::new()), Err(HiliteError::EmptyCatalog)));
    }

    #[test]
    fn duplicate_titles_are_reported_once() {
        let catalog = Catalog::new(vec![
            Record::new("a", "1"),
            Record::new("b", "2"),
            Record::new("a", "3"),
            Record::new("a", "4"),
        ])
        .unwrap();
        assert_eq!(catalog.duplicate_titles(), vec!["a".to_string()]);
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "Rust", "description": "Systems language"}},
                {{"title": "Go", "description": "Also compiled"}}]"#
        )
        .unwrap();

        let catalog = Catalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1), Some(&Record::new("Go", "Also compiled")));
    }

    #[test]
    fn malformed_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = Catalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, HiliteError::CatalogParse { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_json_file(&dir.path().join("posts.json")).unwrap_err();
        assert!(matches!(err, HiliteError::CatalogRead { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("posts.json"));
    }

    #[test]
    fn empty_json_array_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        assert!(matches!(
            Catalog::from_json_file(file.path()),
            Err(HiliteError::EmptyCatalog)
        ));
    }
}
