pub mod extractor;
pub mod google_maps;
pub mod models;

pub use extractor::ApifyRestaurantExtractor;
pub use google_maps::{is_valid_google_maps_url, parse_google_maps_url, PlaceInfo};
pub use models::{Coordinates, RestaurantProfile, ReviewHighlight};
