//! GioPhone endpoints, all keyed by MSISDN:
//!   GET  /cliente/:msisdn      — plan and balance
//!   PUT  /bloquear/:msisdn     — block the line, returns a folio
//!   POST /reactivar/:msisdn    — reactivate with a block folio
//!   GET  /facturacion/:msisdn  — billing summary

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path},
    http::HeaderMap,
    response::Response,
    Extension,
};
use labmock_core::{
    request::{decode_json, ReactivateRequest},
    types::Msisdn,
    Endpoint, MockEngine,
};

use super::{path_segment, require_api_key};
use crate::error::{render, ApiError};

fn authorized_msisdn(
    engine: &MockEngine,
    endpoint: Endpoint,
    headers: &HeaderMap,
    raw: Result<Path<String>, PathRejection>,
) -> Result<Msisdn, ApiError> {
    require_api_key(engine, endpoint, headers)?;
    let raw = path_segment(endpoint, raw)?;
    Msisdn::parse(&raw).map_err(|e| ApiError::new(endpoint, e))
}

pub async fn customer(
    Extension(engine): Extension<Arc<MockEngine>>,
    headers: HeaderMap,
    msisdn: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let msisdn = authorized_msisdn(&engine, Endpoint::Customer, &headers, msisdn)?;
    Ok(render(engine.customer(msisdn)))
}

pub async fn block_line(
    Extension(engine): Extension<Arc<MockEngine>>,
    headers: HeaderMap,
    msisdn: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let endpoint = Endpoint::Block;
    let msisdn = authorized_msisdn(&engine, endpoint, &headers, msisdn)?;
    let reply = engine
        .block_line(msisdn)
        .map_err(|e| ApiError::new(endpoint, e))?;
    Ok(render(reply))
}

pub async fn reactivate_line(
    Extension(engine): Extension<Arc<MockEngine>>,
    headers: HeaderMap,
    msisdn: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let endpoint = Endpoint::Reactivate;
    let fail = |e| ApiError::new(endpoint, e);
    let msisdn = authorized_msisdn(&engine, endpoint, &headers, msisdn)?;
    let req: ReactivateRequest = decode_json(&body).map_err(fail)?;
    let block_folio = req.folio().map_err(fail)?;
    let reply = engine
        .reactivate_line(msisdn, block_folio)
        .map_err(fail)?;
    Ok(render(reply))
}

pub async fn billing(
    Extension(engine): Extension<Arc<MockEngine>>,
    headers: HeaderMap,
    msisdn: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let endpoint = Endpoint::Billing;
    let msisdn = authorized_msisdn(&engine, endpoint, &headers, msisdn)?;
    let reply = engine.billing(msisdn).map_err(|e| ApiError::new(endpoint, e))?;
    Ok(render(reply))
}
