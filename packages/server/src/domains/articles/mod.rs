pub mod generator;
pub mod models;
pub mod prompts;

pub use generator::OpenAIArticleGenerator;
pub use models::{slugify, ArticleBatch, GeneratedArticle, PublishedArticle};
