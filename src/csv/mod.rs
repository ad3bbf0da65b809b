//! CSV parsing for published-sheet exports.
//!
//! The accepted dialect is deliberately narrow: comma-delimited,
//! double-quote field quoting with no escaped-quote convention, line-feed
//! separators, no embedded newlines inside quoted fields.

mod table;
mod tokenize;

pub use table::{RawRow, parse};
pub use tokenize::tokenize;
