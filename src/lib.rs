//! sheetfeed: client for news feeds published as spreadsheet CSV or JSON.
//!
//! A published Google Sheet (or anything shaped like one) is fetched over a
//! single GET, parsed into schema-less rows, normalized into typed
//! [`Article`] records, and returned sorted most-recent-first. The parse and
//! normalize stages are pure and total: dirty spreadsheet data degrades
//! field-by-field to explicit sentinels instead of failing the row.

/// The client (`FeedClient`), builder, error type, and networking internals.
pub mod core;
/// CSV tokenizer and header-to-row table parser.
pub mod csv;
/// Article model, field normalization, and the sort/filter pipeline.
pub mod article;
/// Fetch layer: one GET against the published sheet, CSV or JSON body.
pub mod feed;
/// Refresh driver owning the cached collection and the auto-refresh flag.
pub mod desk;

pub use crate::core::{DisplayZone, FeedClient, FeedClientBuilder, FeedError};
pub use article::{Article, Timestamp, matches_query, normalize, present};
pub use csv::RawRow;
pub use desk::NewsDesk;
pub use feed::{FeedBuilder, FeedFormat};
