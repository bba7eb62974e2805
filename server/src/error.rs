//! Error envelope rendering for the HTTP boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use labmock_core::{response::error_reply, response::Reply, Endpoint, MockError};
use serde::Serialize;

/// An engine error tagged with the endpoint it came from, so the
/// envelope can null that endpoint's entity fields.
#[derive(Debug)]
pub struct ApiError {
    pub endpoint: Endpoint,
    pub source:   MockError,
}

impl ApiError {
    pub fn new(endpoint: Endpoint, source: MockError) -> Self {
        Self { endpoint, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.source.status() {
            500 => log::error!("{}: {:#}", self.endpoint.name(), self.source),
            _ => log::debug!("{}: {}", self.endpoint.name(), self.source),
        }
        render(error_reply(&self.source, self.endpoint.entity_fields()))
    }
}

/// Render an assembled reply with its status code.
pub fn render<B: Serialize>(reply: Reply<B>) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(reply.body)).into_response()
}
