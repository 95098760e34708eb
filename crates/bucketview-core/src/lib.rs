//! Core types, configuration, and error taxonomy for Bucketview.
//!
//! This crate provides the building blocks shared by the listing pipeline and
//! the edge handler: the [`BrowserConfig`] established once at startup, the
//! [`BrowseError`] taxonomy surfaced as `502 Bad Gateway`, and the per-request
//! listing types ([`ListingRequest`], [`ListingEntry`]).

mod config;
mod error;
mod types;

pub use config::{BrowserConfig, DEFAULT_STORE_BASE_URL};
pub use error::{BrowseError, BrowseResult};
pub use types::{EntryKind, ListingEntry, ListingRequest, SortOrder};
