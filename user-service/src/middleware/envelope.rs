//! Envelope error responses produced outside the handlers
//!
//! Timeouts, body-limit rejections and caught panics are answered by
//! tower-http layers with empty or plain-text bodies. This rewrites any
//! non-JSON error response into the `{"success":false,"error":..}` shape the
//! handlers use, keeping the status and the other headers.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};

use crate::responses::ApiResponse;

/// Rewrite bare error responses into the JSON envelope
///
/// Use with [`axum::middleware::map_response`].
pub async fn envelope_errors(response: Response) -> Response {
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let envelope = ApiResponse::failure(error_message(status));
    let body = match serde_json::to_vec(&envelope) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Failed to encode error envelope: {}", e);
            return response;
        }
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Response::from_parts(parts, Body::from(body))
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn error_message(status: StatusCode) -> &'static str {
    match status {
        StatusCode::PAYLOAD_TOO_LARGE => "Payload too large",
        StatusCode::REQUEST_TIMEOUT => "Request timeout",
        StatusCode::INTERNAL_SERVER_ERROR => "Internal server error",
        other => other.canonical_reason().unwrap_or("Request failed"),
    }
}
