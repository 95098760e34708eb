//! Local development server for the Bucketview edge handler.
//!
//! Adapts plain HTTP requests into [`EdgeRequest`](bucketview_edge::EdgeRequest)s,
//! runs them through an [`EdgeHandler`](bucketview_edge::EdgeHandler), and writes
//! the edge response back verbatim, reason phrase included.
//!
//! - **Body** ([`body`]): the [`BrowserBody`](body::BrowserBody) response body.
//! - **Service** ([`service`]): the hyper [`BrowserHttpService`](service::BrowserHttpService).
//! - **Server** ([`server`]): the accept loop with graceful shutdown.

pub mod body;
pub mod server;
pub mod service;

pub use body::BrowserBody;
pub use server::serve;
pub use service::BrowserHttpService;
