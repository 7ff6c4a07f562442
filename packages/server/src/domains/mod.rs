// Domain modules
//
// restaurants: Google Maps URL handling and the Apify-backed extractor
// articles: prompts, article models and the OpenAI-backed generator
// pipeline: the extraction -> generation coordinator and its error taxonomy

pub mod articles;
pub mod pipeline;
pub mod restaurants;
