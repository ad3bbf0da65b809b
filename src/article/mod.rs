//! Article records and the normalization/presentation pipeline.
//!
//! [`normalize`] turns one schema-less [`RawRow`](crate::csv::RawRow) into a
//! typed [`Article`]; [`present`] runs a whole batch through filter and
//! sort. Both are pure and total — malformed field values degrade to
//! sentinels (`None`, [`Timestamp::Unknown`], [`Timestamp::Invalid`])
//! instead of erroring, which keeps dirty spreadsheets renderable.

mod model;
mod normalize;
mod pipeline;

pub use model::{Article, NO_DATELINE, NO_SUMMARY, Timestamp};
pub use normalize::normalize;
pub use pipeline::{matches_query, present};
