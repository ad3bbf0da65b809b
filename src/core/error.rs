use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Only transport-level conditions surface here. Malformed spreadsheet
/// content never does: the parse and normalize stages resolve bad fields to
/// sentinel values locally (see [`crate::article`]).
#[derive(Debug, Error)]
pub enum FeedError {
    /// An error occurred during the HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The JSON feed body could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The client was built without a feed URL.
    #[error("no feed url configured")]
    MissingFeedUrl,
}
