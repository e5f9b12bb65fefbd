use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// Transport failure. The request URL is stripped, it carries the bot token.
    #[error("notification request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("notification rejected with status {0}")]
    Status(StatusCode),
    #[error("notification rejected: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        NotifyError::Request(e.without_url())
    }
}
