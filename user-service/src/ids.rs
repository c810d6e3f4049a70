//! Request identifiers
//!
//! Every inbound request is tagged with an `x-request-id` of the form
//! `req_<uuidv7 as 32 hex digits>`, so ids sort by arrival time and can be
//! correlated across the trace span and the response headers.

use http::Request;
use std::fmt;
use tower_http::request_id::{MakeRequestId, RequestId as TowerRequestId};
use uuid::Uuid;

/// A prefixed, time-sortable request identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// The prefix used for request IDs
    pub const PREFIX: &'static str = "req";

    /// Creates a new request ID backed by a UUIDv7.
    #[must_use]
    pub fn new() -> Self {
        Self(format!("{}_{}", Self::PREFIX, Uuid::now_v7().simple()))
    }

    /// Returns the request ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `MakeRequestId` implementation that generates [`RequestId`]s for tower-http.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTypedRequestId;

impl MakeRequestId for MakeTypedRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<TowerRequestId> {
        let id = RequestId::new();
        let header_value = http::HeaderValue::from_str(id.as_str()).ok()?;
        Some(TowerRequestId::new(header_value))
    }
}
