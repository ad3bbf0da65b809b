//! Refresh driver: explicit state that earlier revisions kept in globals.

use crate::article::{Article, matches_query};
use crate::feed::{FeedBuilder, FeedFormat};
use crate::{FeedClient, FeedError};

/// Owns the last successful article collection and the auto-refresh flag.
///
/// One desk per page session. Each successful refresh replaces the cached
/// collection wholesale; a failed refresh leaves it untouched, so stale
/// news beats no news. The pure pipeline never sees this state — the desk
/// calls it and assigns the result.
///
/// Persisting the auto-refresh preference across sessions belongs to the
/// host; the desk only holds the in-session value.
pub struct NewsDesk {
    client: FeedClient,
    format: FeedFormat,
    articles: Vec<Article>,
    auto_refresh: bool,
}

impl NewsDesk {
    /// Create a desk with an empty collection and auto-refresh enabled,
    /// matching the original widget's startup default.
    pub fn new(client: FeedClient, format: FeedFormat) -> Self {
        Self {
            client,
            format,
            articles: Vec::new(),
            auto_refresh: true,
        }
    }

    /// The last successfully fetched collection, most recent first.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// The lead story: first article of the current collection.
    #[must_use]
    pub fn lead(&self) -> Option<&Article> {
        self.articles.first()
    }

    /// Client-side search over the cached collection. No fetch.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Article> {
        if query.trim().is_empty() {
            return self.articles.iter().collect();
        }
        self.articles
            .iter()
            .filter(|a| matches_query(a, query))
            .collect()
    }

    /// Whether the periodic refresh loop is enabled.
    #[must_use]
    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    /// Toggle the periodic refresh loop. The host reads this back to
    /// persist its preference flag.
    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
    }

    /// Run one fetch cycle and replace the collection on success.
    ///
    /// # Errors
    ///
    /// Returns a `FeedError` on transport or status failure; the cached
    /// collection is left unchanged in that case.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(url = %self.client.feed_url())))]
    pub async fn refresh(&mut self) -> Result<&[Article], FeedError> {
        let fresh = FeedBuilder::new(&self.client)
            .format(self.format)
            .fetch()
            .await?;
        self.articles = fresh;
        Ok(&self.articles)
    }

    /// Periodic refresh loop at the client's configured interval.
    ///
    /// Refreshes sequentially, so at most one fetch is ever in flight; a
    /// failed cycle is dropped and the next tick tries again. Returns
    /// immediately if auto-refresh is disabled. Runs until the surrounding
    /// task is cancelled.
    pub async fn run(&mut self) {
        if !self.auto_refresh {
            return;
        }
        let mut ticker = tokio::time::interval(self.client.refresh_interval());
        // First tick of a tokio interval fires immediately; the original
        // widget also fetches once on load.
        loop {
            ticker.tick().await;
            if let Err(_e) = self.refresh().await {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "refresh cycle failed; keeping previous collection");
            }
        }
    }
}
