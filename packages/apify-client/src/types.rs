use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single start URL entry for actor input.
#[derive(Debug, Clone, Serialize)]
pub struct StartUrl {
    pub url: String,
}

/// Input for the compass/crawler-google-places actor.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleMapsScraperInput {
    #[serde(rename = "startUrls")]
    pub start_urls: Vec<StartUrl>,
    #[serde(rename = "maxCrawledPlacesPerSearch")]
    pub max_crawled_places_per_search: u32,
    #[serde(rename = "maxReviews")]
    pub max_reviews: u32,
    #[serde(rename = "reviewsSort")]
    pub reviews_sort: String,
    pub language: String,
    #[serde(rename = "scrapeReviewsPersonalData")]
    pub scrape_reviews_personal_data: bool,
}

impl GoogleMapsScraperInput {
    /// Input for scraping a single place listing, newest reviews first.
    pub fn for_place(url: &str, max_reviews: u32, language: &str) -> Self {
        Self {
            start_urls: vec![StartUrl {
                url: url.to_string(),
            }],
            max_crawled_places_per_search: 1,
            max_reviews,
            reviews_sort: "newest".to_string(),
            language: language.to_string(),
            scrape_reviews_personal_data: false,
        }
    }
}

/// A single place from the Google Maps scraper dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleMapsPlace {
    pub title: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(rename = "totalScore")]
    pub total_score: Option<f64>,
    #[serde(rename = "reviewsCount")]
    pub reviews_count: Option<i64>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
    pub location: Option<PlaceLocation>,
    #[serde(rename = "openingHours", default)]
    pub opening_hours: Vec<OpeningHours>,
    pub price: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub reviews: Vec<PlaceReview>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
}

/// A review attached to a scraped place.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceReview {
    pub name: Option<String>,
    pub text: Option<String>,
    pub stars: Option<f64>,
    #[serde(rename = "publishedAtDate")]
    pub published_at_date: Option<DateTime<Utc>>,
}

/// Apify wraps single objects in `{"data": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Actor run metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunData {
    pub id: String,
    pub status: String,
    pub default_dataset_id: String,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// Coarse run state. Apify reports `READY`, `RUNNING`, `SUCCEEDED`, `FAILED`,
/// `TIMING-OUT`, `TIMED-OUT`, `ABORTING` and `ABORTED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Pending,
    Succeeded,
    Failed,
}

impl RunData {
    /// Wall-clock run time, once Apify has stamped both ends.
    pub fn duration(&self) -> Option<chrono::Duration> {
        Some(self.finished_at? - self.started_at?)
    }

    pub fn state(&self) -> RunState {
        match self.status.as_str() {
            "SUCCEEDED" => RunState::Succeeded,
            "FAILED" | "ABORTED" | "TIMED-OUT" => RunState::Failed,
            _ => RunState::Pending,
        }
    }
}
