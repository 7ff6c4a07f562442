//! Apify-backed restaurant extraction.

use anyhow::{anyhow, bail, Context, Result};
use apify_client::ApifyClient;
use async_trait::async_trait;
use tracing::{info, warn};

use super::google_maps::{is_valid_google_maps_url, parse_google_maps_url};
use super::models::RestaurantProfile;
use crate::common::{LocationReference, RestaurantRecord};
use crate::kernel::BaseRestaurantExtractor;

/// Scrapes a Google Maps listing with Apify and normalises it into a
/// [`RestaurantProfile`] record.
pub struct ApifyRestaurantExtractor {
    client: ApifyClient,
    max_reviews: u32,
    language: String,
}

impl ApifyRestaurantExtractor {
    pub fn new(client: ApifyClient, max_reviews: u32, language: String) -> Self {
        Self {
            client,
            max_reviews,
            language,
        }
    }
}

#[async_trait]
impl BaseRestaurantExtractor for ApifyRestaurantExtractor {
    async fn extract(&self, reference: &LocationReference) -> Result<RestaurantRecord> {
        let url = reference.as_str().trim();
        if !is_valid_google_maps_url(url) {
            bail!(
                "not a Google Maps listing URL (expected /maps/place, /maps/reviews or /maps/search): {}",
                url
            );
        }

        let info = parse_google_maps_url(url);

        let places = self
            .client
            .scrape_google_maps_place(url, self.max_reviews, &self.language)
            .await
            .context("Google Maps scrape failed")?;

        if places.len() > 1 {
            warn!(count = places.len(), url, "Scrape returned several places, using the first");
        }

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("no place found for {}", url))?;

        let profile = RestaurantProfile::from_place(place, &info)
            .ok_or_else(|| anyhow!("scraped place has no name: {}", url))?;

        info!(
            name = %profile.name,
            place_key = %profile.place_key,
            reviews = profile.reviews.len(),
            "Restaurant extracted"
        );

        RestaurantRecord::from_serialize(&profile).context("Failed to serialise restaurant profile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn non_maps_urls_fail_before_any_request() {
        // Unroutable base URL: reaching the network would surface a different error
        let client = ApifyClient::new("token").with_base_url("http://127.0.0.1:9");
        let extractor = ApifyRestaurantExtractor::new(client, 5, "en".into());
        let reference = LocationReference::parse(Some("https://maps.example/place/123")).unwrap();

        let err = extractor.extract(&reference).await.unwrap_err();

        assert!(err.to_string().contains("not a Google Maps listing URL"));
    }
}
