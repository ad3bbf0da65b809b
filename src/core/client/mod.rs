//! Public client surface + builder.

mod constants;

use std::time::Duration;

use chrono_tz::Tz;
use reqwest::Client;
use url::Url;

use crate::core::FeedError;
use constants::{DEFAULT_REFRESH_INTERVAL, USER_AGENT};

/// Time zone used when formatting article datelines for display.
///
/// Revisions of the original widget disagreed on this (system-local vs. a
/// hardcoded zone), so it is configuration, not a constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayZone {
    /// Format in the host's local time zone.
    #[default]
    Local,
    /// Format in a fixed IANA time zone.
    Fixed(Tz),
}

/// Handle to one published-sheet feed: the HTTP client plus feed settings.
///
/// Cheap to clone; builders take a clone so one client can serve many
/// concurrent fetches.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    feed_url: Url,
    zone: DisplayZone,
    refresh_interval: Duration,
}

impl FeedClient {
    /// Create a new builder.
    pub fn builder() -> FeedClientBuilder {
        FeedClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The published sheet URL this client fetches.
    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    /// The configured dateline display zone.
    pub fn display_zone(&self) -> DisplayZone {
        self.zone
    }

    /// The configured auto-refresh cadence.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Default)]
pub struct FeedClientBuilder {
    user_agent: Option<String>,
    feed_url: Option<Url>,
    zone: Option<DisplayZone>,
    refresh_interval: Option<Duration>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FeedClientBuilder {
    /// Set the published sheet URL to fetch. Required.
    #[must_use]
    pub fn feed_url(mut self, url: Url) -> Self {
        self.feed_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the time zone used for dateline display. Default: host-local.
    #[must_use]
    pub fn display_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Set the auto-refresh cadence used by [`crate::NewsDesk`].
    /// Default: 5 minutes.
    #[must_use]
    pub fn refresh_interval(mut self, dur: Duration) -> Self {
        self.refresh_interval = Some(dur);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingFeedUrl`] when no feed URL was set, or
    /// [`FeedError::Http`] when the underlying HTTP client fails to build.
    pub fn build(self) -> Result<FeedClient, FeedError> {
        let feed_url = self.feed_url.ok_or(FeedError::MissingFeedUrl)?;

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .gzip(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FeedClient {
            http,
            feed_url,
            zone: self.zone.unwrap_or_default(),
            refresh_interval: self.refresh_interval.unwrap_or(DEFAULT_REFRESH_INTERVAL),
        })
    }
}
