//! Bucket listing pipeline: parse, present, render.
//!
//! - **Parsing** ([`parser`]): a tolerant tag scanner that pulls folder
//!   prefixes and object keys out of a `ListBucketResult` document.
//! - **Presentation** ([`presenter`]): merges, sorts and paginates entries into
//!   a [`ListingPage`](presenter::ListingPage).
//! - **Rendering** ([`render`]): turns a page into a self-contained HTML
//!   document with sort, page-size and pagination controls.
//! - **Links** ([`href`]): browse/proxy URL construction and
//!   `encodeURIComponent`-compatible percent encoding.
//!
//! # Architecture
//!
//! ```text
//! raw listing document
//!   -> parse_listing (folders, files; self-references removed)
//!   -> present (merge, sort, slice, parent prefix)
//!   -> render_listing (HTML)
//! ```

pub mod href;
pub mod parser;
pub mod presenter;
pub mod render;

pub use href::{build_href, encode_uri_component, proxy_href};
pub use parser::{ParsedListing, parse_listing};
pub use presenter::{ListingPage, parent_prefix, present};
pub use render::{render_error, render_listing};
