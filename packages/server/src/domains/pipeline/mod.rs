pub mod coordinator;
pub mod error;

pub use coordinator::ArticlePipeline;
pub use error::{PipelineError, Stage};
