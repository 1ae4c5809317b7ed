//! Corpus of items to rank.
//!
//! A [`Corpus`] is an ordered collection of [`Item`]s keyed by title.
//! Titles are unique: pushing a duplicate title is a no-op and the first
//! occurrence wins, so downstream indices stay stable.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::corpus::Corpus;
//!
//! let mut corpus = Corpus::new();
//! corpus.push("The Martian", "space survival botany");
//! corpus.push("Gravity", "space survival debris");
//!
//! assert_eq!(corpus.len(), 2);
//! assert_eq!(corpus.index_of("Gravity"), Some(1));
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single corpus entry: a unique title plus a free-text tag string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique title (the corpus key)
    pub title: String,
    /// Free-text descriptive keywords
    pub tags: String,
}

/// Ordered, title-unique collection of items.
///
/// Insertion order is preserved and is observable: it breaks ranking
/// ties, so two corpora with the same items in different orders are not
/// interchangeable.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl Corpus {
    /// Creates an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus from (title, tags) pairs, first occurrence winning
    /// on duplicate titles.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::corpus::Corpus;
    ///
    /// let corpus = Corpus::from_pairs([
    ///     ("Alien", "horror space crew"),
    ///     ("Alien", "this duplicate is dropped"),
    ///     ("Aliens", "action space marines"),
    /// ]);
    ///
    /// assert_eq!(corpus.len(), 2);
    /// assert_eq!(corpus.get(0).map(|i| i.tags.as_str()), Some("horror space crew"));
    /// ```
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut corpus = Self::new();
        for (title, tags) in pairs {
            corpus.push(title, tags);
        }
        corpus
    }

    /// Parses a corpus from a JSON array of `{"title": ..., "tags": ...}`
    /// objects. Duplicate titles collapse to the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SugerirError::Serialization`] on malformed JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::corpus::Corpus;
    ///
    /// let json = r#"[{"title": "Moon", "tags": "space isolation clone"}]"#;
    /// let corpus = Corpus::from_json_str(json).expect("valid corpus JSON");
    /// assert_eq!(corpus.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Ok(Self::from_pairs(
            items.into_iter().map(|item| (item.title, item.tags)),
        ))
    }

    /// Reads and parses a corpus from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SugerirError::Io`] if the file cannot be read and
    /// [`crate::SugerirError::Serialization`] on malformed JSON.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Appends an item. Returns `true` if it was inserted, `false` if the
    /// title was already present (the existing entry is kept unchanged).
    pub fn push<S: Into<String>, T: Into<String>>(&mut self, title: S, tags: T) -> bool {
        let title = title.into();
        if self.index.contains_key(&title) {
            return false;
        }
        self.index.insert(title.clone(), self.items.len());
        self.items.push(Item {
            title,
            tags: tags.into(),
        });
        true
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the corpus holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a given insertion index.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Item> {
        self.items.get(idx)
    }

    /// Insertion index of a title, if present.
    #[must_use]
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    /// Returns true if a title is present.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// All items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Titles in insertion order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_lookup() {
        let mut corpus = Corpus::new();
        assert!(corpus.push("Arrival", "alien contact linguistics"));
        assert!(corpus.push("Contact", "alien radio signal"));

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.index_of("Arrival"), Some(0));
        assert_eq!(corpus.index_of("Contact"), Some(1));
        assert!(corpus.contains("Arrival"));
        assert!(!corpus.contains("Sphere"));
    }

    #[test]
    fn test_duplicate_title_first_wins() {
        let mut corpus = Corpus::new();
        assert!(corpus.push("Arrival", "alien contact linguistics"));
        assert!(!corpus.push("Arrival", "completely different tags"));

        assert_eq!(corpus.len(), 1);
        assert_eq!(
            corpus.get(0).map(|i| i.tags.as_str()),
            Some("alien contact linguistics")
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let corpus = Corpus::from_pairs([("c", "1"), ("a", "2"), ("b", "3")]);
        let titles: Vec<&str> = corpus.titles().collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"title": "Moon", "tags": "space isolation clone"},
            {"title": "Sunshine", "tags": "space sun mission"},
            {"title": "Moon", "tags": "duplicate dropped"}
        ]"#;
        let corpus = Corpus::from_json_str(json).expect("valid corpus JSON");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(0).map(|i| i.tags.as_str()), Some("space isolation clone"));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = Corpus::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, crate::SugerirError::Serialization(_)));
    }

    #[test]
    fn test_from_json_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"title": "Moon", "tags": "space isolation clone"}}]"#
        )
        .expect("write temp JSON");

        let corpus = Corpus::from_json_path(file.path()).expect("load from path");
        assert_eq!(corpus.len(), 1);
        assert!(corpus.contains("Moon"));
    }

    #[test]
    fn test_from_json_path_missing_file() {
        let err = Corpus::from_json_path("/no/such/corpus.json").unwrap_err();
        assert!(matches!(err, crate::SugerirError::Io(_)));
    }
}
