// TMDb metadata client.
//
// Two-step lookup: search for the title, then fetch the video list for the
// first hit to find a YouTube trailer. Only the fields the detail card
// consumes are deserialized.
//
// API docs: https://developer.themoviedb.org/reference/search-movie

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{MetadataProvider, MovieDetails};

/// Default TMDb API endpoint.
pub const DEFAULT_TMDB_API_URL: &str = "https://api.themoviedb.org/3";

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// TMDb metadata provider.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Create a new TMDb client with the given API key.
    ///
    /// Pass a different base URL for testing or a proxy.
    pub fn new(base_url: &str, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("marquee/0.1 (movie-recommendations)")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Make a GET request to a TMDb path and deserialize the response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        debug!(path = path, "TMDb GET request");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .with_context(|| format!("TMDb request failed: {path}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("TMDb {path} returned {status}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse TMDb {path} response"))
    }

    /// Find the YouTube trailer for a movie id, if TMDb lists one.
    async fn find_trailer(&self, movie_id: i64) -> Result<Option<String>> {
        let resp: VideosResponse = self
            .get_json(&format!("/movie/{movie_id}/videos"), &[])
            .await?;

        Ok(resp
            .results
            .into_iter()
            .find(|v| v.kind == "Trailer" && v.site == "YouTube")
            .map(|v| format!("https://www.youtube.com/watch?v={}", v.key)))
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn lookup(&self, title: &str) -> Result<Option<MovieDetails>> {
        let resp: SearchResponse = self
            .get_json("/search/movie", &[("query", title)])
            .await?;

        let Some(hit) = resp.results.into_iter().next() else {
            return Ok(None);
        };

        // The trailer lookup is best-effort: a failed video list should not
        // sink the rest of the detail card.
        let trailer_url = match self.find_trailer(hit.id).await {
            Ok(url) => url,
            Err(e) => {
                warn!(movie_id = hit.id, error = %e, "Trailer lookup failed");
                None
            }
        };

        Ok(Some(MovieDetails {
            title: hit.title,
            poster_url: hit.poster_path.map(|p| format!("{POSTER_BASE_URL}{p}")),
            overview: hit.overview,
            vote_average: hit.vote_average,
            info_url: format!("https://www.themoviedb.org/movie/{}", hit.id),
            trailer_url,
        }))
    }
}

// --- TMDb response types ---

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    id: i64,
    title: String,
    poster_path: Option<String>,
    overview: Option<String>,
    vote_average: Option<f64>,
}

#[derive(Deserialize)]
struct VideosResponse {
    results: Vec<Video>,
}

#[derive(Deserialize)]
struct Video {
    key: String,
    site: String,
    #[serde(rename = "type")]
    kind: String,
}
