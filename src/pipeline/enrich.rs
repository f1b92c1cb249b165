// Per-title enrichment fan-out.
//
// Ranking is already done by the time this runs. Each recommended title
// gets an independent metadata + availability lookup, a handful in flight
// at a time, and the results come back in ranked order. A failed metadata
// lookup degrades that one entry to "no details" — it never drops the
// recommendation or aborts the batch.

use futures::stream::{self, StreamExt};
use tracing::warn;

use crate::metadata::{AvailabilityProvider, MetadataProvider, MovieDetails};
use crate::ranking::Recommendation;

/// How many title lookups to keep in flight at once.
const LOOKUP_CONCURRENCY: usize = 4;

/// A recommendation decorated with whatever the gateways could supply.
pub struct EnrichedRecommendation {
    pub recommendation: Recommendation,
    /// `None` when the provider had no match or the lookup failed.
    pub details: Option<MovieDetails>,
    /// Empty when nothing carries the title (or the lookup failed).
    pub providers: Vec<String>,
}

/// Decorate ranked recommendations with metadata and availability.
pub async fn run(
    recommendations: Vec<Recommendation>,
    metadata: &dyn MetadataProvider,
    availability: &dyn AvailabilityProvider,
    region: &str,
) -> Vec<EnrichedRecommendation> {
    stream::iter(recommendations)
        .map(|rec| async move {
            let details = match metadata.lookup(&rec.title).await {
                Ok(details) => details,
                Err(e) => {
                    warn!(title = %rec.title, error = %e, "Metadata lookup failed");
                    None
                }
            };
            let providers = availability.providers(&rec.title, region).await;

            EnrichedRecommendation {
                recommendation: rec,
                details,
                providers,
            }
        })
        .buffered(LOOKUP_CONCURRENCY)
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;

    struct StubMetadata;

    #[async_trait]
    impl MetadataProvider for StubMetadata {
        async fn lookup(&self, title: &str) -> Result<Option<MovieDetails>> {
            if title == "Known (1999)" {
                Ok(Some(MovieDetails {
                    title: title.to_string(),
                    poster_url: None,
                    overview: Some("A film.".to_string()),
                    vote_average: Some(7.5),
                    info_url: "https://example.test/1".to_string(),
                    trailer_url: None,
                }))
            } else if title == "Broken (2000)" {
                anyhow::bail!("provider exploded")
            } else {
                Ok(None)
            }
        }
    }

    struct StubAvailability;

    #[async_trait]
    impl AvailabilityProvider for StubAvailability {
        async fn providers(&self, title: &str, _region: &str) -> Vec<String> {
            if title == "Known (1999)" {
                vec!["nfx".to_string()]
            } else {
                Vec::new()
            }
        }
    }

    fn rec(title: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            genres: "Drama".to_string(),
            score: 0.5,
        }
    }

    #[tokio::test]
    async fn test_enrich_preserves_order_and_degrades_failures() {
        let recs = vec![rec("Known (1999)"), rec("Broken (2000)"), rec("Missing (2001)")];

        let enriched = run(recs, &StubMetadata, &StubAvailability, "AU").await;

        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched[0].recommendation.title, "Known (1999)");
        assert!(enriched[0].details.is_some());
        assert_eq!(enriched[0].providers, vec!["nfx".to_string()]);

        // Gateway failure degrades to "no details", never drops the entry
        assert_eq!(enriched[1].recommendation.title, "Broken (2000)");
        assert!(enriched[1].details.is_none());

        assert_eq!(enriched[2].recommendation.title, "Missing (2001)");
        assert!(enriched[2].details.is_none());
        assert!(enriched[2].providers.is_empty());
    }
}
