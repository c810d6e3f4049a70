//! Enveloped HTTP responses
//!
//! Every JSON body the service produces has the same shape:
//!
//! ```json
//! { "success": true, "data": { "id": 1, "name": "Alice", "email": "a@x.com" } }
//! { "success": false, "error": "User not found" }
//! ```
//!
//! `data` is omitted when there is nothing to return and `error` is omitted on
//! success. The responders below pair the envelope with the right status code:
//!
//! - **200 OK** - [`Success`] (read, list, update)
//! - **200 OK** - [`Acknowledged`] (delete, no payload)
//! - **201 Created** - [`Created`] (create, with `Location`)
//!
//! Failures go through [`crate::error::Error`], which renders the same
//! envelope with `success: false`.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Uniform response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful envelope without a payload
    pub fn acknowledged() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Failed envelope carrying an error message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

// ============================================================================
// 200 OK
// ============================================================================

/// HTTP 200 OK with an enveloped payload
#[derive(Debug)]
pub struct Success<T>(pub T);

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self(data)
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(ApiResponse::ok(self.0))).into_response()
    }
}

/// HTTP 200 OK with `{"success": true}` and no payload
///
/// Returned by delete.
#[derive(Debug, Clone, Copy)]
pub struct Acknowledged;

impl IntoResponse for Acknowledged {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(ApiResponse::acknowledged())).into_response()
    }
}

// ============================================================================
// 201 Created
// ============================================================================

/// HTTP 201 Created response
///
/// Optionally includes a `Location` header pointing to the new resource.
#[derive(Debug)]
pub struct Created<T> {
    data: T,
    location: Option<String>,
}

impl<T> Created<T> {
    /// Create a new 201 Created response
    pub fn new(data: T) -> Self {
        Self {
            data,
            location: None,
        }
    }

    /// Add a Location header pointing to the created resource
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::CREATED, Json(ApiResponse::ok(self.data))).into_response();

        if let Some(location) = self.location {
            if let Ok(header_value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(header::LOCATION, header_value);
            }
        }

        response
    }
}
