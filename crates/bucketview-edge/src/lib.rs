//! Edge handler for browsing an object-storage bucket.
//!
//! This crate turns a CloudFront-style viewer request into exactly one
//! outcome:
//!
//! - **Routing** ([`router`]): classifies the URI as a root redirect, proxy
//!   redirect, browse request, or pass-through.
//! - **Store access** ([`store`]): the [`ObjectStore`](store::ObjectStore)
//!   seam and its HTTP implementation issuing one delimiter listing GET.
//! - **Responses** ([`response`]): redirect, listing and `502` error shapes.
//! - **Handler** ([`handler`]): [`EdgeHandler`](handler::EdgeHandler) ties the
//!   pipeline together.
//! - **Model** ([`model`], [`event`]): the request/response records and the
//!   viewer-request event envelope, all serde-compatible with the CloudFront
//!   wire shape.
//!
//! # Architecture
//!
//! ```text
//! EdgeRequest
//!   -> router::classify
//!     -> redirect ----------------------------------> EdgeResponse (302)
//!     -> browse -> ObjectStore::fetch_listing
//!                -> parse_listing -> present -> render_listing
//!                                             --> EdgeResponse (200 | 502)
//!     -> pass-through ------------------------------> EdgeRequest (unmodified)
//! ```

pub mod error;
pub mod event;
pub mod handler;
pub mod model;
pub mod response;
pub mod router;
pub mod store;

pub use error::EdgeError;
pub use event::ViewerRequestEvent;
pub use handler::EdgeHandler;
pub use model::{EdgeHeader, EdgeHeaders, EdgeOutcome, EdgeRequest, EdgeResponse};
pub use router::{Route, classify};
pub use store::{HttpObjectStore, ObjectStore};
