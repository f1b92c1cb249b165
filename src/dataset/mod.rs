// Dataset loading — movies.csv and ratings.csv into in-memory tables.
//
// This is the only filesystem touchpoint of the recommendation core. Both
// files must parse completely: a missing file, an unreadable row, or a
// missing required column fails the whole load rather than producing a
// partial dataset.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::info;

use crate::error::RecommendError;

/// A single movie row from movies.csv.
///
/// The title doubles as the external-facing lookup key for similarity
/// queries, so titles are expected to be unique within the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    #[serde(rename = "movieId")]
    pub id: i64,
    pub title: String,
    /// Genre tags joined by `|`, e.g. "Action|Comedy". May be empty.
    pub genres: String,
}

/// A single rating row from ratings.csv.
/// Extra columns (e.g. timestamp) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Rating {
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(rename = "movieId")]
    pub movie_id: i64,
    pub rating: f64,
}

/// The loaded dataset. Immutable after load — every derived structure
/// (similarity matrices, title indices) is a pure function of it.
pub struct Dataset {
    pub movies: Vec<Movie>,
    pub ratings: Vec<Rating>,
}

impl Dataset {
    /// Load movies.csv and ratings.csv from the given directory.
    pub fn load(dir: &Path) -> Result<Self, RecommendError> {
        let movies: Vec<Movie> = read_csv(&dir.join("movies.csv"))?;
        let ratings: Vec<Rating> = read_csv(&dir.join("ratings.csv"))?;

        info!(
            movies = movies.len(),
            ratings = ratings.len(),
            "Dataset loaded"
        );

        Ok(Self { movies, ratings })
    }

    /// Look up a movie's genre string by exact title.
    pub fn genres_for(&self, title: &str) -> Option<&str> {
        self.movies
            .iter()
            .find(|m| m.title == title)
            .map(|m| m.genres.as_str())
    }

    /// All titles in dataset row order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, RecommendError> {
    let data_unavailable = |source: csv::Error| RecommendError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(data_unavailable)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(data_unavailable)
}
