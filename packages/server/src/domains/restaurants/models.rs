//! Restaurant profile built from a scraped Google Maps place.

use apify_client::GoogleMapsPlace;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::google_maps::PlaceInfo;

/// Normalised restaurant facts handed to article generation.
///
/// Absent fields are omitted from the serialised record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub maps_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<OpeningHoursEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<ReviewHighlight>,
    pub place_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningHoursEntry {
    pub day: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewHighlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl RestaurantProfile {
    /// Build a profile from a scraped place.
    ///
    /// The name falls back to the one in the URL; `None` when neither has one.
    /// Coordinates prefer the scraped location over the URL's `@lat,lon`.
    pub fn from_place(place: GoogleMapsPlace, info: &PlaceInfo) -> Option<Self> {
        let name = non_blank(place.title).or_else(|| info.query_text.clone())?;

        let coordinates = place
            .location
            .map(|l| Coordinates { lat: l.lat, lng: l.lng })
            .or(match (info.lat, info.lon) {
                (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
                _ => None,
            });

        let category = non_blank(place.category_name).or_else(|| place.categories.first().cloned());

        let reviews = place
            .reviews
            .into_iter()
            .filter_map(|r| {
                let text = non_blank(r.text)?;
                Some(ReviewHighlight {
                    author: non_blank(r.name),
                    rating: r.stars,
                    text,
                    published_at: r.published_at_date,
                })
            })
            .collect();

        Some(Self {
            name,
            address: non_blank(place.address),
            category,
            categories: place.categories,
            rating: place.total_score,
            review_count: place.reviews_count,
            price_level: non_blank(place.price),
            neighborhood: non_blank(place.neighborhood),
            city: non_blank(place.city),
            description: non_blank(place.description),
            phone: non_blank(place.phone),
            website: non_blank(place.website),
            maps_url: non_blank(place.url).unwrap_or_else(|| info.raw.clone()),
            coordinates,
            opening_hours: place
                .opening_hours
                .into_iter()
                .map(|h| OpeningHoursEntry {
                    day: h.day,
                    hours: h.hours,
                })
                .collect(),
            reviews,
            place_key: info.place_key(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
