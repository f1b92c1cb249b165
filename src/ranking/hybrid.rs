// Hybrid ranking — averages the content and collaborative signals.
//
// For a query title, the score of content row i is the mean of
// content[query_content_row][i] and collab[query_collab_row][i]. The two
// matrices are paired POSITIONALLY: entry i of one row is averaged with
// entry i of the other, regardless of which title sits at position i in
// each index. The two indices order their titles independently (content:
// dataset order over all movies; collaborative: sorted order over rated
// titles), so position i usually names different movies on each side.
// This pairing is kept as the load-bearing contract of the ranking
// behavior; see DESIGN.md for the decision record.
//
// Iteration is bounded by the content matrix. A collaborative row that
// ends early is a construction defect and fails loudly instead of
// wrapping or truncating.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::RecommendError;
use crate::similarity::{collaborative, content, CollaborativeSimilarity, ContentSimilarity};

/// One recommended title with its blended score.
///
/// Produced fresh per query, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub title: String,
    /// The raw `|`-joined genre string from the dataset row.
    pub genres: String,
    /// Mean of the content and collaborative similarity entries, in [-1, 1].
    pub score: f64,
}

/// Both similarity matrices plus everything needed to answer
/// `recommend` queries. Read-only and reentrant once built.
pub struct HybridRanker {
    collab: CollaborativeSimilarity,
    content: ContentSimilarity,
    /// Genre strings by content row position (dataset row order).
    genres: Vec<String>,
}

impl HybridRanker {
    /// Build both similarity signals from a loaded dataset.
    ///
    /// Pure and deterministic: the same dataset always yields the same
    /// matrices, so building twice gives numerically identical rankers.
    pub fn build(dataset: &Dataset) -> Self {
        let collab = collaborative::build(dataset);
        let content = content::build(dataset);
        let genres = dataset.movies.iter().map(|m| m.genres.clone()).collect();

        info!(
            rated_titles = collab.index.len(),
            movies = content.index.len(),
            "Similarity matrices built"
        );

        Self {
            collab,
            content,
            genres,
        }
    }

    /// Rank titles similar to `query_title`, returning at most `top_n`.
    ///
    /// A title missing from either index yields `Ok(empty)` — asking about
    /// an unknown movie is a normal outcome, not an error. The result never
    /// contains the query title or a duplicate, and comes back shorter than
    /// `top_n` when the dataset has fewer eligible titles, never padded.
    pub fn recommend(
        &self,
        query_title: &str,
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let (Some(collab_pos), Some(content_pos)) = (
            self.collab.index.position(query_title),
            self.content.index.position(query_title),
        ) else {
            debug!(title = query_title, "Title not indexed; no recommendations");
            return Ok(Vec::new());
        };

        let content_row = self.content.matrix.row(content_pos);
        let collab_row = self.collab.matrix.row(collab_pos);

        let mut scored: Vec<(usize, f64)> = Vec::with_capacity(content_row.len());
        for (i, &content_score) in content_row.iter().enumerate() {
            let collab_score =
                collab_row
                    .get(i)
                    .copied()
                    .ok_or(RecommendError::IndexOutOfRange {
                        index: i,
                        len: collab_row.len(),
                    })?;
            scored.push((i, (content_score + collab_score) / 2.0));
        }

        // Stable sort by score descending — ties keep ascending row order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut recommendations = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for (row, score) in scored {
            if recommendations.len() >= top_n {
                break;
            }
            let Some(title) = self.content.index.title(row) else {
                continue;
            };
            if title == query_title || !seen.insert(title) {
                continue;
            }
            recommendations.push(Recommendation {
                title: title.to_string(),
                genres: self.genres.get(row).cloned().unwrap_or_default(),
                score,
            });
        }

        Ok(recommendations)
    }

    /// Dimension of the collaborative matrix (titles with at least one rating).
    pub fn rated_title_count(&self) -> usize {
        self.collab.index.len()
    }

    /// Dimension of the content matrix (all movies).
    pub fn movie_count(&self) -> usize {
        self.content.index.len()
    }
}
