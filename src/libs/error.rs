//! Error type shared by the Hubstaff client, the fixture source and the
//! aggregator.
//!
//! Every variant is fatal for a report run: nothing is retried and no
//! partial matrix is returned. Commands wrap these in `anyhow::Error`.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubstaffError {
    /// Unusable credentials or configuration, including an unknown organization.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API error: {status} for {path}")]
    Api { status: StatusCode, path: String },

    /// The body was not the envelope we expected.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server kept handing out continuation tokens past the hop cap.
    #[error("Pagination stopped after {max_pages} pages: the server kept returning a continuation token")]
    PageLimitExceeded { max_pages: usize },

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = HubstaffError> = std::result::Result<T, E>;
