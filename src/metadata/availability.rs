// Streaming availability client.
//
// Queries a JustWatch-compatible search endpoint and collects the provider
// names attached to the first matching title. This boundary fails open:
// any failure — network, HTTP status, parsing, no match — surfaces as an
// empty provider list (warn-logged), never as an error the caller has to
// handle.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::AvailabilityProvider;

/// Default JustWatch-compatible availability endpoint.
pub const DEFAULT_WATCH_API_URL: &str = "https://apis.justwatch.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Streaming availability provider backed by the JustWatch content API.
pub struct WatchClient {
    client: Client,
    base_url: String,
}

impl WatchClient {
    /// Create a new availability client pointing at the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("marquee/0.1 (movie-recommendations)")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search the region's catalog for a title.
    async fn search(&self, title: &str, region: &str) -> Result<SearchResponse> {
        let url = format!(
            "{}/content/titles/{}/popular",
            self.base_url,
            locale_for(region)
        );
        let body = serde_json::json!({ "query": title, "page_size": 1 });

        debug!(title = title, region = region, "Availability search");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Availability request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Availability API returned {status}: {body}");
        }

        response
            .json::<SearchResponse>()
            .await
            .context("Failed to parse availability response")
    }
}

#[async_trait]
impl AvailabilityProvider for WatchClient {
    async fn providers(&self, title: &str, region: &str) -> Vec<String> {
        let resp = match self.search(title, region).await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(title = title, region = region, error = %e,
                    "Availability lookup failed; treating as unavailable");
                return Vec::new();
            }
        };

        let Some(item) = resp.items.into_iter().next() else {
            return Vec::new();
        };

        // Deduplicate while keeping the API's offer order.
        let mut seen = HashSet::new();
        item.offers
            .into_iter()
            .map(|offer| {
                offer
                    .package_short_name
                    .unwrap_or_else(|| offer.provider_id.to_string())
            })
            .filter(|provider| seen.insert(provider.clone()))
            .collect()
    }
}

/// Map a region code to a JustWatch locale, e.g. "AU" -> "en_AU".
fn locale_for(region: &str) -> String {
    format!("en_{}", region.to_uppercase())
}

// --- Availability API response types ---

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    #[serde(default)]
    offers: Vec<Offer>,
}

#[derive(Deserialize)]
struct Offer {
    provider_id: i64,
    package_short_name: Option<String>,
}
