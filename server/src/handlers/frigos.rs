//! Frigos endpoints:
//!   POST /frigos/reporte           — raise an incident report
//!   GET  /frigos/reporte/:report   — look up a report's status

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path},
    http::HeaderMap,
    response::Response,
    Extension,
};
use labmock_core::{
    request::{decode_json, ReportRequest},
    types::ReportNumber,
    Endpoint, MockEngine,
};

use super::{path_segment, require_api_key};
use crate::error::{render, ApiError};

pub async fn create_report(
    Extension(engine): Extension<Arc<MockEngine>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let endpoint = Endpoint::CreateReport;
    require_api_key(&engine, endpoint, &headers)?;
    let req: ReportRequest = decode_json(&body).map_err(|e| ApiError::new(endpoint, e))?;
    Ok(render(engine.create_report(&req)))
}

pub async fn report_status(
    Extension(engine): Extension<Arc<MockEngine>>,
    headers: HeaderMap,
    report: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let endpoint = Endpoint::ReportStatus;
    require_api_key(&engine, endpoint, &headers)?;
    let report = path_segment(endpoint, report)?;
    let report = ReportNumber::parse(&report).map_err(|e| ApiError::new(endpoint, e))?;
    Ok(render(engine.report_status(report)))
}
