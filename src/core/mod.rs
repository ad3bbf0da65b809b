//! Core components of the `sheetfeed` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`FeedClient`] and its builder.
//! - The primary [`FeedError`] type.
//! - Internal networking helpers.

/// The main client (`FeedClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FeedError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FeedClient`
pub use client::{DisplayZone, FeedClient, FeedClientBuilder};
pub use error::FeedError;
