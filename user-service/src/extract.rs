//! Request extractors with enveloped rejections
//!
//! axum's stock `Path` and `Json` extractors reject with plain-text bodies
//! (and `Json` insists on a `Content-Type` header). These wrappers keep the
//! status codes the API promises and render rejections through [`Error`].

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{request::Parts, StatusCode},
};
use serde::de::DeserializeOwned;

use crate::error::{Error, INVALID_PAYLOAD, INVALID_USER_ID};

/// The path suffix after `/users/` parsed as a base-10 integer
///
/// A leading sign is accepted; anything else that is not an `i64` is a 400,
/// including an empty suffix or one with further `/` segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl std::str::FromStr for UserId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|_| Error::BadRequest(INVALID_USER_ID.to_string()))
    }
}

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| Error::BadRequest(INVALID_USER_ID.to_string()))?;

        raw.parse()
    }
}

/// JSON request body decoded without looking at `Content-Type`
///
/// Only the first JSON value in the body is decoded; anything after it is
/// ignored. An empty body is a 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T>
where
    T: DeserializeOwned,
{
    /// Decode a raw body
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let first = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<T>()
            .next();

        match first {
            Some(Ok(value)) => Ok(JsonBody(value)),
            Some(Err(e)) => {
                tracing::debug!(error = %e, "rejected request payload");
                Err(Error::BadRequest(INVALID_PAYLOAD.to_string()))
            }
            None => {
                tracing::debug!("rejected empty request payload");
                Err(Error::BadRequest(INVALID_PAYLOAD.to_string()))
            }
        }
    }
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "failed to read request body");
            // Bodies without a Content-Length only hit the size limit here
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                Error::PayloadTooLarge
            } else {
                Error::BadRequest(INVALID_PAYLOAD.to_string())
            }
        })?;

        Self::from_bytes(&bytes)
    }
}
