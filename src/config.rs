use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The API key comes from the environment (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Directory containing movies.csv and ratings.csv
    pub data_dir: PathBuf,
    /// TMDb API key — only needed for `recommend --details`.
    pub tmdb_api_key: String,
    /// TMDb API endpoint (defaults to https://api.themoviedb.org/3)
    pub tmdb_api_url: String,
    /// JustWatch-compatible availability endpoint
    pub watch_api_url: String,
    /// Default region for availability lookups
    pub watch_region: String,
    /// Where the liked-movies profile is stored
    pub profile_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a usable default except the TMDb key, which is only
    /// required once detail fetching comes into play.
    pub fn load() -> Result<Self> {
        Ok(Self {
            data_dir: env::var("MARQUEE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            tmdb_api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            tmdb_api_url: env::var("TMDB_API_URL")
                .unwrap_or_else(|_| crate::metadata::tmdb::DEFAULT_TMDB_API_URL.to_string()),
            watch_api_url: env::var("WATCH_API_URL").unwrap_or_else(|_| {
                crate::metadata::availability::DEFAULT_WATCH_API_URL.to_string()
            }),
            watch_region: env::var("WATCH_REGION").unwrap_or_else(|_| "AU".to_string()),
            profile_path: env::var("MARQUEE_PROFILE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| crate::profile::default_profile_path()),
        })
    }

    /// Check that the TMDb API key is configured.
    /// Call this before any operation that fetches metadata details.
    pub fn require_tmdb(&self) -> Result<()> {
        if self.tmdb_api_key.is_empty() {
            anyhow::bail!(
                "TMDB_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }
}
