//! Apify platform client, scoped to running the Google Maps places actor.
//!
//! ```rust,ignore
//! use apify_client::ApifyClient;
//!
//! let client = ApifyClient::new(token);
//! let places = client
//!     .scrape_google_maps_place("https://www.google.com/maps/place/Cafe+Luna", 20, "en")
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{
    GoogleMapsPlace, GoogleMapsScraperInput, OpeningHours, PlaceLocation, PlaceReview, RunData,
    RunState,
};

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use types::Envelope;

const API_ROOT: &str = "https://api.apify.com/v2";

/// Actor ID for compass/crawler-google-places (API path form).
pub const GOOGLE_MAPS_PLACES_SCRAPER: &str = "compass~crawler-google-places";

/// Longest Apify will hold a run-status request open.
const LONG_POLL_SECS: u64 = 60;

const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(300);

#[derive(Clone)]
pub struct ApifyClient {
    http: reqwest::Client,
    token: String,
    api_root: String,
    places_actor: String,
    max_wait: Duration,
}

impl ApifyClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            api_root: API_ROOT.to_string(),
            places_actor: GOOGLE_MAPS_PLACES_SCRAPER.to_string(),
            max_wait: DEFAULT_MAX_WAIT,
        }
    }

    /// Use a different actor for place scraping. Accepts `user/actor` or `user~actor`.
    pub fn with_places_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.places_actor = actor_id.into().replace('/', "~");
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_root = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Give up on a run that has not finished after `max_wait`.
    pub fn with_max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    pub fn places_actor(&self) -> &str {
        &self.places_actor
    }

    pub async fn start_run<I: Serialize>(&self, actor_id: &str, input: &I) -> Result<RunData> {
        let response = self
            .http
            .post(format!("{}/acts/{}/runs", self.api_root, actor_id))
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        Ok(decode::<Envelope<RunData>>(response).await?.data)
    }

    /// Long-poll `run` until it succeeds, fails, or `max_wait` runs out.
    pub async fn wait_for_run(&self, mut run: RunData) -> Result<RunData> {
        let deadline = Instant::now() + self.max_wait;

        loop {
            match run.state() {
                RunState::Succeeded => return Ok(run),
                RunState::Failed => {
                    return Err(ApifyError::RunFailed {
                        run_id: run.id,
                        status: run.status,
                    })
                }
                RunState::Pending => {}
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(ApifyError::WaitTimedOut {
                    run_id: run.id,
                    waited: self.max_wait,
                });
            }

            debug!(run_id = %run.id, status = %run.status, "Waiting for actor run");
            let wait_secs = remaining.as_secs().clamp(1, LONG_POLL_SECS);
            let response = self
                .http
                .get(format!("{}/actor-runs/{}", self.api_root, run.id))
                .query(&[("waitForFinish", wait_secs)])
                .bearer_auth(&self.token)
                .send()
                .await?;

            run = decode::<Envelope<RunData>>(response).await?.data;
        }
    }

    pub async fn get_dataset_items<T: DeserializeOwned>(&self, dataset_id: &str) -> Result<Vec<T>> {
        let response = self
            .http
            .get(format!("{}/datasets/{}/items", self.api_root, dataset_id))
            .query(&[("format", "json"), ("clean", "true")])
            .bearer_auth(&self.token)
            .send()
            .await?;

        decode(response).await
    }

    /// Run the places actor on one listing URL and return the scraped places.
    pub async fn scrape_google_maps_place(
        &self,
        maps_url: &str,
        max_reviews: u32,
        language: &str,
    ) -> Result<Vec<GoogleMapsPlace>> {
        let input = GoogleMapsScraperInput::for_place(maps_url, max_reviews, language);
        let run = self.start_run(&self.places_actor, &input).await?;
        info!(run_id = %run.id, actor = %self.places_actor, maps_url, "Places scrape started");

        let run = self.wait_for_run(run).await?;
        if let Some(duration) = run.duration() {
            debug!(run_id = %run.id, duration_secs = duration.num_seconds(), "Places run finished");
        }

        let places: Vec<GoogleMapsPlace> = self.get_dataset_items(&run.default_dataset_id).await?;
        info!(run_id = %run.id, places = places.len(), "Places scrape finished");

        Ok(places)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApifyError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(status: &str) -> RunData {
        serde_json::from_value(serde_json::json!({
            "id": "run1",
            "status": status,
            "defaultDatasetId": "ds1"
        }))
        .unwrap()
    }

    fn offline_client() -> ApifyClient {
        ApifyClient::new("token").with_base_url("http://127.0.0.1:9/")
    }

    #[test]
    fn slash_actor_ids_are_converted_to_api_form() {
        let client = ApifyClient::new("token").with_places_actor("compass/google-maps-reviews-scraper");

        assert_eq!(client.places_actor(), "compass~google-maps-reviews-scraper");
        assert_eq!(ApifyClient::new("token").places_actor(), GOOGLE_MAPS_PLACES_SCRAPER);
    }

    #[test]
    fn base_url_is_normalised() {
        assert_eq!(offline_client().api_root, "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn finished_runs_need_no_polling() {
        let client = offline_client();

        let done = client.wait_for_run(run("SUCCEEDED")).await.unwrap();
        assert_eq!(done.default_dataset_id, "ds1");

        let err = client.wait_for_run(run("ABORTED")).await.unwrap_err();
        assert!(matches!(err, ApifyError::RunFailed { ref status, .. } if status == "ABORTED"));
    }

    #[tokio::test]
    async fn pending_run_with_no_time_left_times_out() {
        let client = offline_client().with_max_wait(Duration::ZERO);

        let err = client.wait_for_run(run("RUNNING")).await.unwrap_err();

        assert!(matches!(err, ApifyError::WaitTimedOut { .. }));
    }

    fn canned(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn decode_unwraps_run_envelope() {
        let response = canned(
            201,
            r#"{"data": {"id": "run1", "status": "READY", "defaultDatasetId": "ds1", "startedAt": "2024-03-01T10:00:00.000Z"}}"#,
        );

        let run = decode::<Envelope<RunData>>(response).await.unwrap().data;

        assert_eq!(run.id, "run1");
        assert_eq!(run.state(), RunState::Pending);
        assert!(run.started_at.is_some());
    }

    #[tokio::test]
    async fn decode_reads_dataset_items() {
        let response = canned(200, r#"[{"title": "Cafe Luna", "address": "12 Elm St"}, {"title": null}]"#);

        let places: Vec<GoogleMapsPlace> = decode(response).await.unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].title.as_deref(), Some("Cafe Luna"));
        assert!(places[1].title.is_none());
    }

    #[tokio::test]
    async fn decode_reports_status_and_body_of_failures() {
        let response = canned(401, r#"{"error": {"type": "token-not-valid"}}"#);

        let err = decode::<Envelope<RunData>>(response).await.unwrap_err();

        match err {
            ApifyError::Status { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("token-not-valid"));
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_api_is_a_transport_error() {
        let err = offline_client().wait_for_run(run("RUNNING")).await.unwrap_err();

        assert!(matches!(err, ApifyError::Transport(_)));
    }
}
