// Collaborative similarity — co-rating patterns between movie titles.
//
// The classic pivot-then-cosine construction: ratings are joined to movie
// titles, pivoted into a dense user x title matrix (missing ratings are 0),
// and each title column is compared to every other column by cosine
// similarity over the user axis.
//
// A movie nobody rated produces no column at all — it is absent from this
// matrix and its index, not present with zero similarity.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::index::TitleIndex;
use super::matrix::SimilarityMatrix;
use crate::dataset::Dataset;

/// The collaborative similarity matrix plus the title index describing
/// its row order.
pub struct CollaborativeSimilarity {
    pub matrix: SimilarityMatrix,
    pub index: TitleIndex,
}

/// Build the collaborative signal from a loaded dataset.
///
/// Pivot rows (users) and columns (titles) are kept in sorted order, so the
/// same dataset always produces the same matrix and index. A user rating
/// the same title more than once contributes the mean of those ratings.
pub fn build(dataset: &Dataset) -> CollaborativeSimilarity {
    let titles_by_id: HashMap<i64, &str> = dataset
        .movies
        .iter()
        .map(|m| (m.id, m.title.as_str()))
        .collect();

    // user -> title -> (rating sum, rating count). Ratings referencing an
    // unknown movie id drop out of the join here.
    let mut cells: BTreeMap<i64, BTreeMap<&str, (f64, u32)>> = BTreeMap::new();
    for rating in &dataset.ratings {
        if let Some(&title) = titles_by_id.get(&rating.movie_id) {
            let cell = cells
                .entry(rating.user_id)
                .or_default()
                .entry(title)
                .or_insert((0.0, 0));
            cell.0 += rating.rating;
            cell.1 += 1;
        }
    }

    // Column order = lexicographic over every title with at least one rating.
    let mut rated_titles: Vec<&str> = cells
        .values()
        .flat_map(|row| row.keys().copied())
        .collect();
    rated_titles.sort_unstable();
    rated_titles.dedup();

    let index = TitleIndex::from_titles(rated_titles.iter().map(|t| t.to_string()).collect());

    // One dense vector per title column, indexed over users in sorted order.
    let user_count = cells.len();
    let mut columns = vec![vec![0.0; user_count]; index.len()];
    for (user_pos, user_row) in cells.values().enumerate() {
        for (&title, &(sum, count)) in user_row {
            if let Some(title_pos) = index.position(title) {
                columns[title_pos][user_pos] = sum / f64::from(count);
            }
        }
    }

    debug!(
        users = user_count,
        titles = index.len(),
        "Collaborative pivot built"
    );

    CollaborativeSimilarity {
        matrix: SimilarityMatrix::from_vectors(&columns),
        index,
    }
}
