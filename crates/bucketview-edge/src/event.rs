//! CloudFront viewer-request event envelope.
//!
//! Lambda@Edge delivers `{ "Records": [{ "cf": { "request": { ... } } }] }`.
//! Only the first record is handled.

use serde::{Deserialize, Serialize};

use crate::error::EdgeError;
use crate::model::EdgeRequest;

/// Top-level viewer-request event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerRequestEvent {
    /// Event records; CloudFront sends exactly one.
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

/// One event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// CloudFront payload.
    pub cf: CloudFrontPayload,
}

/// CloudFront payload of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontPayload {
    /// The viewer request.
    pub request: EdgeRequest,
}

impl ViewerRequestEvent {
    /// Wrap a single request in an event envelope.
    #[must_use]
    pub fn from_request(request: EdgeRequest) -> Self {
        Self {
            records: vec![EventRecord {
                cf: CloudFrontPayload { request },
            }],
        }
    }

    /// Take the request of the first record.
    pub fn into_request(self) -> Result<EdgeRequest, EdgeError> {
        self.records
            .into_iter()
            .next()
            .map(|record| record.cf.request)
            .ok_or_else(|| EdgeError::InvalidEvent("event contains no records".to_owned()))
    }
}
