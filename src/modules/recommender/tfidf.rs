//! TF-IDF vectors over book descriptions
//!
//! Smoothed IDF (`ln((1+n)/(1+df)) + 1`) with L2-normalised rows, so cosine
//! similarity between two vectors is their dot product.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};
use unicode_normalization::UnicodeNormalization;

static ENGLISH_STOP_WORDS: Lazy<HashSet<String>> = Lazy::new(|| {
    stop_words::get(stop_words::LANGUAGE::English)
        .iter()
        .map(|w| w.to_string().to_lowercase())
        .collect()
});

/// Sparse unit vector, entries sorted by term index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product; both sides are sorted so this is a merge walk
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_val) = self.entries[i];
            let (b_idx, b_val) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_val * b_val;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Split text into lowercase terms, dropping stop words and 1-char tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text.nfkc().collect::<String>().to_lowercase();
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .filter(|t| !ENGLISH_STOP_WORDS.contains(*t))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfModel {
    /// Learn vocabulary and document frequencies from `docs`
    pub fn fit<'a, I>(docs: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        let mut n_docs = 0usize;

        for doc in docs {
            n_docs += 1;
            let unique: HashSet<String> = tokenize(doc).into_iter().collect();
            for term in unique {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term).or_insert(next);
                if idx == doc_freq.len() {
                    doc_freq.push(0);
                }
                doc_freq[idx] += 1;
            }
        }

        let n = n_docs as f64;
        let idf = doc_freq
            .into_iter()
            .map(|df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Project `text` onto the learned vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let norm = entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm == 0.0 {
            return SparseVector::default();
        }
        for (_, v) in entries.iter_mut() {
            *v /= norm;
        }
        entries.sort_by_key(|(idx, _)| *idx);

        SparseVector { entries }
    }
}
