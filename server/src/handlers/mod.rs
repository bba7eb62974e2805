pub mod auth;
pub mod frigos;
pub mod gio;
pub mod health;

use axum::{
    extract::{rejection::PathRejection, Path},
    http::HeaderMap,
};
use labmock_core::{request::API_KEY_HEADER, Endpoint, MockEngine, MockError};

use crate::error::ApiError;

/// Shape-check `X-API-Key` for `endpoint`.
pub(crate) fn require_api_key(
    engine: &MockEngine,
    endpoint: Endpoint,
    headers: &HeaderMap,
) -> Result<(), ApiError> {
    if !endpoint.requires_api_key() {
        return Ok(());
    }
    let header = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    engine
        .check_api_key(header)
        .map_err(|e| ApiError::new(endpoint, e))
}

/// Unwrap a path segment, keeping axum's decode failures (bad percent
/// encoding, invalid UTF-8) inside the endpoint's error envelope.
pub(crate) fn path_segment(
    endpoint: Endpoint,
    segment: Result<Path<String>, PathRejection>,
) -> Result<String, ApiError> {
    segment
        .map(|Path(raw)| raw)
        .map_err(|rejection| {
            ApiError::new(endpoint, MockError::invalid("path", rejection.body_text()))
        })
}
