//! Centralized constants for defaults and UA.

use std::time::Duration;

/// Default desktop UA; some sheet hosts throttle obvious bots.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Default auto-refresh cadence (5 minutes).
pub(crate) const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);
