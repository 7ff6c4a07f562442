//! Google Maps listing URL helpers.
//!
//! Works on the public URL only; no Google API is involved.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    /// `@lat,lon` coordinates embedded in place URLs
    static ref COORDINATES: Regex = Regex::new(r"@(-?\d+\.\d+),(-?\d+\.\d+)").unwrap();
}

const MAPS_PATHS: &[&str] = &["/maps/place", "/maps/reviews", "/maps/search"];

/// Whether `raw` looks like a Google Maps place, reviews or search URL.
///
/// Also accepts the `maps.app.goo.gl` / `goo.gl/maps` share links.
pub fn is_valid_google_maps_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw.trim()) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    let path = url.path().to_ascii_lowercase();

    if host == "maps.app.goo.gl" || (host == "goo.gl" && path.starts_with("/maps")) {
        return true;
    }

    host.contains("google") && MAPS_PATHS.iter().any(|p| path.contains(p))
}

/// Basic facts recoverable from the URL itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceInfo {
    pub raw: String,
    pub query_text: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl PlaceInfo {
    /// Stable identifier for a place: name plus coordinates when known.
    pub fn place_key(&self) -> String {
        let name = self.query_text.as_deref().unwrap_or_default().to_lowercase();
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => format!("{}::{}::{}", name, lat, lon),
            _ => name,
        }
    }
}

pub fn parse_google_maps_url(raw: &str) -> PlaceInfo {
    let mut info = PlaceInfo {
        raw: raw.to_string(),
        query_text: None,
        lat: None,
        lon: None,
    };

    if let Some(caps) = COORDINATES.captures(raw) {
        info.lat = caps[1].parse().ok();
        info.lon = caps[2].parse().ok();
    }

    let Ok(url) = Url::parse(raw.trim()) else {
        return info;
    };

    // /maps/place/<name>/...
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|p| !p.is_empty()).collect())
        .unwrap_or_default();
    if let Some(idx) = segments.iter().position(|s| *s == "place") {
        if let Some(name) = segments.get(idx + 1) {
            let spaced = name.replace('+', " ");
            let decoded = urlencoding::decode(&spaced)
                .map(|d| d.into_owned())
                .unwrap_or(spaced);
            let trimmed = decoded.trim();
            if !trimmed.is_empty() {
                info.query_text = Some(trimmed.to_string());
            }
        }
    }

    // ?q=...
    if info.query_text.is_none() {
        info.query_text = url
            .query_pairs()
            .find(|(k, _)| k == "q")
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty());
    }

    info
}
