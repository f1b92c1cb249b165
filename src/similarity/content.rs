// Content similarity — TF-IDF over genre tags.
//
// Each movie becomes a TF-IDF vector over the vocabulary of genre tags.
// Tags are whole tokens: the genre string splits at `|` only, so names
// like "Film-Noir", "Sci-Fi", or "(no genres listed)" stay intact.
// Tags that every movie carries get downweighted; distinctive tags get
// boosted. Rows are L2-normalised, so two movies with the same tag set
// have identical vectors and cosine similarity 1.
//
// Every movie in the dataset gets a row, in dataset order — a movie with
// an empty genre string is a zero vector that scores 0 against everything.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::index::TitleIndex;
use super::matrix::SimilarityMatrix;
use crate::dataset::Dataset;

/// The content similarity matrix plus the title index describing its
/// row order (dataset row order, total over all movies).
pub struct ContentSimilarity {
    pub matrix: SimilarityMatrix,
    pub index: TitleIndex,
}

/// Build the content signal from a loaded dataset.
pub fn build(dataset: &Dataset) -> ContentSimilarity {
    let documents: Vec<Vec<String>> = dataset
        .movies
        .iter()
        .map(|m| tokenize_genres(&m.genres))
        .collect();

    // Vocabulary slots in first-seen order (keeps builds deterministic),
    // with per-tag document frequency. A tag repeated within one movie
    // still counts that movie once.
    let mut vocabulary: HashMap<String, usize> = HashMap::new();
    let mut document_frequency: Vec<usize> = Vec::new();
    for doc in &documents {
        let mut seen_in_doc = HashSet::new();
        for tag in doc {
            if !seen_in_doc.insert(tag.as_str()) {
                continue;
            }
            let slot = *vocabulary.entry(tag.clone()).or_insert_with(|| {
                document_frequency.push(0);
                document_frequency.len() - 1
            });
            document_frequency[slot] += 1;
        }
    }

    // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. Never zero, never negative,
    // defined even for a tag present in every movie.
    let n_docs = documents.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    // TF-IDF rows, L2-normalised. Empty tag lists stay all-zero.
    let mut vectors = vec![vec![0.0; vocabulary.len()]; documents.len()];
    for (row, doc) in vectors.iter_mut().zip(&documents) {
        for tag in doc {
            if let Some(&slot) = vocabulary.get(tag) {
                row[slot] += idf[slot];
            }
        }
        let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in row.iter_mut() {
                *value /= norm;
            }
        }
    }

    debug!(
        movies = documents.len(),
        vocabulary = vocabulary.len(),
        "Genre TF-IDF built"
    );

    let index = TitleIndex::from_titles(dataset.movies.iter().map(|m| m.title.clone()).collect());

    ContentSimilarity {
        matrix: SimilarityMatrix::from_vectors(&vectors),
        index,
    }
}

/// Split a genre string into whole-tag tokens.
///
/// Splitting happens at the `|` separator only — never inside a tag name.
/// Tags are lowercased so casing differences between rows don't split the
/// vocabulary.
fn tokenize_genres(genres: &str) -> Vec<String> {
    genres
        .split('|')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_lowercase)
        .collect()
}
