// External metadata and availability gateways.
//
// These live outside the ranking core: the ranker never blocks on them and
// their failures never propagate into it. Both are behind traits so the
// providers can be swapped (or mocked in tests) without touching the
// pipeline.

pub mod availability;
pub mod tmdb;

use anyhow::Result;
use async_trait::async_trait;

/// Descriptive metadata for a single movie, as returned by a provider.
#[derive(Debug, Clone)]
pub struct MovieDetails {
    pub title: String,
    pub poster_url: Option<String>,
    pub overview: Option<String>,
    /// Community rating on the provider's scale (TMDb: 0-10).
    pub vote_average: Option<f64>,
    /// Link to the provider's info page for this movie.
    pub info_url: String,
    pub trailer_url: Option<String>,
}

/// Trait for looking up descriptive movie metadata.
///
/// Async because providers are HTTP APIs. `Ok(None)` means the provider
/// had no match for the title — a normal outcome, distinct from a failed
/// request.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn lookup(&self, title: &str) -> Result<Option<MovieDetails>>;
}

/// Trait for looking up which streaming services carry a title.
///
/// The signature is deliberately infallible: lookups that fail for any
/// reason — network, HTTP status, parsing, no match — come back as an
/// empty provider list. "Unavailable" and "unknown" are the same answer
/// at this boundary.
#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    async fn providers(&self, title: &str, region: &str) -> Vec<String>;
}
