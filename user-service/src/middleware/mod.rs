//! HTTP middleware

pub mod envelope;
pub mod request_tracking;

pub use envelope::envelope_errors;
pub use request_tracking::{
    request_id_layer, request_id_propagation_layer, sensitive_headers_layer, REQUEST_ID_HEADER,
    SENSITIVE_HEADERS,
};
