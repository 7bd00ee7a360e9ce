//! Local book catalog with precomputed description vectors

use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use super::tfidf::{SparseVector, TfIdfModel};
use crate::domain::DomainError;
use crate::models::RecommendedBook;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub authors: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
}

impl From<&CatalogEntry> for RecommendedBook {
    fn from(entry: &CatalogEntry) -> Self {
        RecommendedBook {
            title: entry.title.clone(),
            authors: entry.authors.clone(),
            thumbnail: entry.thumbnail.clone(),
        }
    }
}

/// Lookup key for a title: lowercase, single-spaced
pub fn title_key(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_title: HashMap<String, usize>,
    model: TfIdfModel,
    vectors: Vec<SparseVector>,
}

impl Catalog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            DomainError::Internal(format!(
                "Cannot open catalog {}: {}. Make sure to save the data.",
                path.display(),
                e
            ))
        })?;
        Self::from_reader(file)
    }

    /// Read a CSV with headers `title,authors,thumbnail,description`
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DomainError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Fields)
            .flexible(true)
            .from_reader(reader);

        let entries = csv_reader
            .deserialize::<CatalogEntry>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut by_title = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            // First occurrence wins on duplicate titles
            by_title.entry(title_key(&entry.title)).or_insert(idx);
        }

        let model = TfIdfModel::fit(entries.iter().map(|e| e.description.as_str()));
        let vectors = entries
            .iter()
            .map(|e| model.transform(&e.description))
            .collect();

        tracing::info!(
            "Catalog loaded: {} books, {} terms",
            entries.len(),
            model.vocabulary_size()
        );

        Self {
            entries,
            by_title,
            model,
            vectors,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Index of the entry whose title matches `title` case-insensitively
    pub fn find(&self, title: &str) -> Option<usize> {
        self.by_title.get(&title_key(title)).copied()
    }

    /// The `k` entries most similar to the entry at `index`, never itself
    pub fn neighbours(&self, index: usize, k: usize) -> Vec<RecommendedBook> {
        let Some(target) = self.vectors.get(index) else {
            return Vec::new();
        };
        self.rank(target, k, Some(index))
    }

    /// The `k` entries whose descriptions are closest to `text`
    pub fn closest_to_text(&self, text: &str, k: usize) -> Vec<RecommendedBook> {
        let query = self.model.transform(text);
        self.rank(&query, k, None)
    }

    fn rank(&self, query: &SparseVector, k: usize, skip: Option<usize>) -> Vec<RecommendedBook> {
        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != skip)
            .map(|(idx, v)| (idx, query.dot(v)))
            .collect();

        // Stable sort: ties keep catalog order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(k)
            .map(|(idx, _)| RecommendedBook::from(&self.entries[idx]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
title,authors,thumbnail,description
the hobbit,J.R.R. Tolkien,http://img/hobbit.jpg,A hobbit joins dwarves on a quest to reclaim treasure from a dragon
the silmarillion,J.R.R. Tolkien,http://img/silm.jpg,Elves and dwarves fight over jewels in an ancient mythic age
dune,Frank Herbert,http://img/dune.jpg,Desert planet spice empire and giant sandworms
eragon,Christopher Paolini,http://img/eragon.jpg,A farm boy finds a dragon egg and becomes a dragon rider
";

    fn catalog() -> Catalog {
        Catalog::from_reader(CSV.as_bytes()).expect("catalog parses")
    }

    #[test]
    fn find_ignores_case_and_spacing() {
        let catalog = catalog();
        assert_eq!(catalog.find("The  Hobbit"), Some(0));
        assert_eq!(catalog.find("DUNE"), Some(2));
        assert_eq!(catalog.find("Neuromancer"), None);
    }

    #[test]
    fn neighbours_exclude_the_book_itself() {
        let catalog = catalog();
        let recs = catalog.neighbours(0, 5);
        assert_eq!(recs.len(), 3);
        assert!(recs.iter().all(|r| r.title != "the hobbit"));
        assert_eq!(recs[0].title, "eragon");
    }

    #[test]
    fn closest_to_text_ranks_by_description() {
        let catalog = catalog();
        let recs = catalog.closest_to_text("sandworms on a desert planet", 2);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "dune");
        assert_eq!(recs[0].thumbnail, "http://img/dune.jpg");
    }

    #[test]
    fn equal_scores_keep_catalog_order() {
        let entry = |title: &str, description: &str| CatalogEntry {
            title: title.to_string(),
            authors: "Author".to_string(),
            thumbnail: String::new(),
            description: description.to_string(),
        };
        let catalog = Catalog::from_entries(vec![
            entry("query", "lighthouse keeper"),
            entry("b1", "volcano"),
            entry("shared", "lighthouse"),
            entry("b2", "glacier"),
            entry("b3", "canyon"),
            entry("b4", "meadow"),
        ]);

        let titles: Vec<String> = catalog
            .neighbours(0, 5)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["shared", "b1", "b2", "b3", "b4"]);
    }

    #[test]
    fn neighbours_of_unknown_index_is_empty() {
        assert!(catalog().neighbours(42, 5).is_empty());
    }

    #[test]
    fn missing_description_column_defaults_to_empty() {
        let csv = "title,authors,thumbnail\nsolo,Someone,http://img/solo.jpg\n";
        let catalog = Catalog::from_reader(csv.as_bytes()).expect("catalog parses");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).map(|e| e.description.as_str()), Some(""));
    }
}
