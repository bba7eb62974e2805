//! POST /auth/token

use std::sync::Arc;

use axum::{body::Bytes, response::Response, Extension};
use labmock_core::{
    request::{decode_json, TokenRequest},
    Endpoint, MockEngine,
};

use crate::error::{render, ApiError};

pub async fn issue_token(
    Extension(engine): Extension<Arc<MockEngine>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let fail = |e| ApiError::new(Endpoint::Token, e);
    let req: TokenRequest = decode_json(&body).map_err(fail)?;
    let reply = engine.issue_token(&req).map_err(fail)?;
    Ok(render(reply))
}
