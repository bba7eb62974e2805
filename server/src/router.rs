//! Router construction for the Lab mock server.

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::{self as axum_mw, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Extension, Json, Router,
};
use labmock_core::{
    response::{error_reply, ErrorBody, ErrorDetail, CODE_NOT_FOUND},
    MockEngine, MockError,
};
use tower_http::catch_panic::CatchPanicLayer;
use uuid::Uuid;

use crate::{error::render, handlers};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the full axum router with all routes and middleware.
pub fn build_router(engine: Arc<MockEngine>) -> Router {
    let frigos = Router::new()
        .route("/reporte", post(handlers::frigos::create_report))
        .route("/reporte/:report", get(handlers::frigos::report_status));

    // Mounted under both prefixes; /giophone is the older path.
    let gio = || {
        Router::new()
            .route("/cliente/:msisdn", get(handlers::gio::customer))
            .route("/bloquear/:msisdn", put(handlers::gio::block_line))
            .route("/reactivar/:msisdn", post(handlers::gio::reactivate_line))
            .route("/facturacion/:msisdn", get(handlers::gio::billing))
    };

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/auth/token", post(handlers::auth::issue_token))
        .nest("/frigos", frigos)
        .nest("/gio", gio())
        .nest("/giophone", gio())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(Extension(engine))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(axum_mw::from_fn(request_id))
}

fn routing_error(status: StatusCode, message: &str) -> Response {
    let body = ErrorBody {
        fields: &[],
        errors: vec![ErrorDetail {
            code:    CODE_NOT_FOUND,
            message: message.into(),
        }],
    };
    (status, Json(body)).into_response()
}

async fn not_found() -> Response {
    routing_error(StatusCode::NOT_FOUND, "Not Found")
}

async fn method_not_allowed() -> Response {
    routing_error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// Last resort for a panicking handler: the 7000 envelope instead of a
/// dropped connection.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    log::error!("handler panicked: {detail}");
    render(error_reply(&MockError::Other(anyhow::anyhow!(detail)), &[]))
}

/// Tag every request with a correlation id and log its outcome.
async fn request_id(req: Request, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let mut resp = next.run(req).await;
    log::info!("{id} {method} {path} -> {}", resp.status().as_u16());

    if let Ok(value) = HeaderValue::from_str(&id) {
        resp.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    resp
}
