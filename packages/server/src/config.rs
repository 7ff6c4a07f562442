use anyhow::{ensure, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::server::AppOptions;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub apify_token: String,
    pub apify_actor_id: String,
    pub max_reviews: u32,
    pub openai_api_key: String,
    pub openai_model: String,
    pub article_count: u32,
    pub article_language: String,
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String> {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{} must be set", name))
        };

        let config = Self {
            port: parse_or(&lookup, "PORT", 8080)?,
            apify_token: required("APIFY_TOKEN")?,
            apify_actor_id: lookup("APIFY_ACTOR_ID")
                .unwrap_or_else(|| apify_client::GOOGLE_MAPS_PLACES_SCRAPER.to_string()),
            max_reviews: parse_or(&lookup, "MAX_REVIEWS", 20)?,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            article_count: parse_or(&lookup, "ARTICLE_COUNT", 3)?,
            article_language: lookup("ARTICLE_LANGUAGE").unwrap_or_else(|| "en".to_string()),
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 180)?),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };

        ensure!(
            (1..=10).contains(&config.article_count),
            "ARTICLE_COUNT must be between 1 and 10"
        );
        ensure!(
            !config.request_timeout.is_zero(),
            "REQUEST_TIMEOUT_SECS must be greater than zero"
        );

        Ok(config)
    }

    /// HTTP layer settings derived from this configuration.
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            request_timeout: self.request_timeout,
            allowed_origins: self.allowed_origins.clone(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number", name)),
        None => Ok(default),
    }
}
