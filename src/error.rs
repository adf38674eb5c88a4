// Error taxonomy for the scrape pipeline.
//
// None of these propagate out of the paginator or fetcher as hard
// failures: pagination truncates, the fetcher drops the single item.
// The variants exist so the drop sites can log a typed cause.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network-level failure (DNS, connect, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {status}")]
    BadStatus { status: StatusCode },

    /// Success status but the body is not the expected structure.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Structured data present but field extraction failed.
    #[error("extraction failed: {0}")]
    Extraction(String),
}
