// Restaurant article generator - API core
//
// Turns a Google Maps listing URL into blog articles: the place is scraped
// into a restaurant record, then the record is written up by an LLM.
// The pipeline in domains/pipeline only sees the two collaborators through
// the kernel traits; concrete Apify/OpenAI adapters live in their domains.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
