use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::core::DisplayZone;

/// Fallback shown when an article carries no summary.
pub const NO_SUMMARY: &str = "No summary available.";

/// Dateline shown when an article carries no published time at all.
pub const NO_DATELINE: &str = "N/A";

/// Dateline format: long month name, numeric day/year, 12-hour clock.
const DATELINE_FMT: &str = "%B %-d, %Y, %I:%M %p";

/// A published time that may be missing or unparsable.
///
/// The original widget encoded these states as the magic strings `"N/A"` and
/// `"Invalid Date"`; here they are explicit variants so the sort comparator
/// is exhaustive instead of string-matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Timestamp {
    /// A parsed, comparable instant.
    Valid(DateTime<Utc>),
    /// The field was empty or absent.
    Unknown,
    /// The field was present but unparsable; the raw text is kept for
    /// display fallback.
    Invalid(String),
}

impl Timestamp {
    /// The comparable instant, when there is one.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Valid(dt) => Some(*dt),
            Self::Unknown | Self::Invalid(_) => None,
        }
    }

    /// Ordering used by the presentation pipeline: most recent first,
    /// `Unknown`/`Invalid` after every valid instant and equal to each
    /// other (a stable sort preserves their relative order).
    #[must_use]
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        match (self.instant(), other.instant()) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// A normalized, sanitized article record ready for display.
///
/// Value object: a fresh collection is built on every fetch cycle and
/// replaces the previous one wholesale. Field-level sanitization has already
/// happened, so a renderer may embed the URL and dateline without its own
/// validity checks (injection escaping remains the renderer's job).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// The headline. Never blank: rows without a usable headline are
    /// excluded by the pipeline before sorting.
    pub headline: String,
    /// The article summary, when one was present.
    pub summary: Option<String>,
    /// Normalized absolute link, or `None` for "no link" (render as
    /// non-clickable).
    pub link: Option<Url>,
    /// When the article was published.
    pub published: Timestamp,
    /// Free-text ticker list, when present; `None` suppresses the metadata
    /// line in the rendering layer.
    pub tickers: Option<String>,
    /// Normalized article image link, when present.
    pub image: Option<Url>,
}

impl Article {
    /// Summary text with the no-summary fallback applied.
    #[must_use]
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or(NO_SUMMARY)
    }

    /// Newspaper-style dateline for display, e.g. `June 5, 2025, 03:42 PM`.
    ///
    /// `Unknown` renders as `"N/A"`; `Invalid` falls back to the raw
    /// spreadsheet text.
    #[must_use]
    pub fn dateline(&self, zone: DisplayZone) -> String {
        match &self.published {
            Timestamp::Valid(dt) => match zone {
                DisplayZone::Local => dt
                    .with_timezone(&chrono::Local)
                    .format(DATELINE_FMT)
                    .to_string(),
                DisplayZone::Fixed(tz) => {
                    dt.with_timezone(&tz).format(DATELINE_FMT).to_string()
                }
            },
            Timestamp::Unknown => NO_DATELINE.to_string(),
            Timestamp::Invalid(raw) => raw.clone(),
        }
    }
}
