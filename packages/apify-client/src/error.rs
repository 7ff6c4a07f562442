use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApifyError>;

#[derive(Debug, Error)]
pub enum ApifyError {
    #[error("request to Apify failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Apify responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("actor run {run_id} ended with status {status}")]
    RunFailed { run_id: String, status: String },

    #[error("actor run {run_id} still unfinished after {}s", .waited.as_secs())]
    WaitTimedOut { run_id: String, waited: Duration },
}
