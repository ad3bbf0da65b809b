mod api;
mod wire;

use crate::article::{Article, present};
use crate::csv::RawRow;
use crate::{FeedClient, FeedError};

/// Body format of the published sheet.
///
/// Early revisions of the publishing script exported CSV; the latest one
/// returns a JSON array of row objects. Both map onto the same rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedFormat {
    /// Comma-separated export (`output=csv`).
    #[default]
    Csv,
    /// JSON array of objects keyed by header name.
    Json,
}

/// A builder for one fetch of the published sheet.
pub struct FeedBuilder {
    client: FeedClient,
    format: FeedFormat,
    query: Option<String>,
}

impl FeedBuilder {
    /// Creates a new `FeedBuilder` against the given client's feed URL.
    pub fn new(client: &FeedClient) -> Self {
        Self {
            client: client.clone(),
            format: FeedFormat::default(),
            query: None,
        }
    }

    /// Sets the expected body format. Default: CSV.
    #[must_use]
    pub const fn format(mut self, format: FeedFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a case-insensitive search query applied over headline, summary,
    /// and tickers before the result is returned.
    #[must_use]
    pub fn query(mut self, q: impl Into<String>) -> Self {
        self.query = Some(q.into());
        self
    }

    /// Executes the request and returns the presented article collection:
    /// normalized, headline-filtered, query-filtered, most recent first.
    ///
    /// # Errors
    ///
    /// Returns a `FeedError` when the request fails, the server responds
    /// with a non-success status, or a JSON body cannot be deserialized.
    /// Malformed rows and dirty field values are not errors.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(url = %self.client.feed_url())))]
    pub async fn fetch(self) -> Result<Vec<Article>, FeedError> {
        let rows = api::fetch_rows(&self.client, self.format).await?;
        Ok(present(&rows, self.query.as_deref()))
    }

    /// Like [`fetch`](Self::fetch), but stops after parsing: the raw
    /// header-keyed rows, unnormalized and unsorted.
    ///
    /// # Errors
    ///
    /// Same conditions as [`fetch`](Self::fetch).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(url = %self.client.feed_url())))]
    pub async fn fetch_rows(self) -> Result<Vec<RawRow>, FeedError> {
        api::fetch_rows(&self.client, self.format).await
    }
}
