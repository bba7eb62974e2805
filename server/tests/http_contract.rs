//! HTTP-level contract tests for the Lab mock APIs.
//!
//! Drives the full router in-process with `oneshot`, so status codes,
//! header checks and JSON shapes are exercised exactly as clients see them.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get as get_route;
use http_body_util::BodyExt;
use labmock_core::{MockConfig, MockEngine};
use labmock_server::{
    build_router,
    router::{panic_response, REQUEST_ID_HEADER},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

const REPORT_STATUSES: [&str; 11] = [
    "abierto",
    "cerrado",
    "en revisión",
    "en espera de respuesta",
    "en proceso",
    "resuelto",
    "cancelado",
    "pendiente de revisión",
    "pendiente de respuesta",
    "pendiente de resolución",
    "pendiente de cierre",
];

// ── Test app builder ───────────────────────────────────────────

fn build_test_app() -> axum::Router {
    let engine = MockEngine::new(MockConfig::default_test()).expect("test engine");
    build_router(Arc::new(engine))
}

fn api_key() -> String {
    "a".repeat(356)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-API-Key", api_key())
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: Value, key: Option<String>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = key {
        builder = builder.header("X-API-Key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let resp = build_test_app().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }));
    (status, body)
}

// ── Auth ───────────────────────────────────────────────────────

#[tokio::test]
async fn token_details_are_returned() {
    let (status, body) = send(with_json(
        "POST",
        "/auth/token",
        json!({ "username": "username", "password": "password" }),
        None,
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token"].as_str().unwrap().len(), 356);
    assert_eq!(body["tokenType"], "Bearer");
    let expires_at = chrono::DateTime::parse_from_rfc3339(body["expiresAt"].as_str().unwrap())
        .expect("ISO datetime");
    assert!(expires_at > chrono::Utc::now());
}

#[tokio::test]
async fn token_rejects_short_credentials() {
    let (status, body) = send(with_json(
        "POST",
        "/auth/token",
        json!({ "username": "usr", "password": "password" }),
        None,
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"][0]["code"], 7001);
}

// ── Frigos ─────────────────────────────────────────────────────

fn report_body(nombre: &str) -> Value {
    json!({
        "motivo": "Motivo",
        "nombre": nombre,
        "direccion": "Direccion",
        "numeroContacto": "525512345678",
    })
}

#[tokio::test]
async fn create_report_is_201_with_report_or_null() {
    for _ in 0..20 {
        let (status, body) =
            send(with_json("POST", "/frigos/reporte", report_body("Ana"), Some(api_key()))).await;
        assert_eq!(status, StatusCode::CREATED);
        if body["success"] == true {
            let reporte = body["reporte"].as_str().unwrap();
            assert_eq!(reporte.len(), 5);
            assert!(reporte.chars().all(|c| c.is_ascii_digit()));
        } else {
            assert!(body["reporte"].is_null());
        }
    }
}

#[tokio::test]
async fn create_report_for_test_customer_fails() {
    let (status, body) =
        send(with_json("POST", "/frigos/reporte", report_body("Test"), Some(api_key()))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "success": false, "reporte": null }));
}

#[tokio::test]
async fn create_report_rejects_invalid_input() {
    let (status, body) = send(with_json(
        "POST",
        "/frigos/reporte",
        json!({ "description": "This is an invalid report" }),
        None,
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["reporte"].is_null());

    let (status, _) = send(with_json(
        "POST",
        "/frigos/reporte",
        json!({ "description": "valid key, invalid body" }),
        Some(api_key()),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_lookup_is_deterministic() {
    let (_, first) = send(get("/frigos/reporte/12345")).await;
    let (status, second) = send(get("/frigos/reporte/12345")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    if second["success"] == true {
        assert!(REPORT_STATUSES.contains(&second["estado"].as_str().unwrap()));
    }
}

#[tokio::test]
async fn pinned_report_is_a_failed_200() {
    let (status, body) = send(get("/frigos/reporte/99999")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false, "estado": null }));
}

#[tokio::test]
async fn report_out_of_range_is_404() {
    for uri in ["/frigos/reporte/9999999", "/frigos/reporte/0"] {
        let (status, body) = send(get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["success"], false);
        assert!(body["estado"].is_null());
    }
}

#[tokio::test]
async fn report_not_an_integer_is_400() {
    let (status, body) = send(get("/frigos/reporte/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["estado"].is_null());
}

#[tokio::test]
async fn undecodable_report_segment_keeps_the_envelope() {
    let (status, body) = send(get("/frigos/reporte/%FF")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body.as_object().unwrap().contains_key("estado"));
    assert!(body["estado"].is_null());
    assert_eq!(body["errors"][0]["code"], 7001);
}

#[tokio::test]
async fn report_lookup_requires_api_key() {
    let req = Request::builder()
        .uri("/frigos/reporte/12345")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let req = Request::builder()
        .uri("/frigos/reporte/12345")
        .header("X-API-Key", "too-short")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── GioPhone ───────────────────────────────────────────────────

#[tokio::test]
async fn customer_lookup_returns_plan() {
    let (status, body) = send(get("/gio/cliente/5215512345678")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["balance"].is_number());
    if body["success"] == true {
        let plan = &body["plan"];
        let nombre = plan["nombre"].as_str().unwrap();
        assert!(nombre.starts_with("Plan Max ") && nombre.ends_with(" Plus"));
        assert!(plan["uso_datos"].as_u64() <= plan["datos"].as_u64());
        assert!(plan["uso_minutos"].as_u64() <= plan["minutos"].as_u64());
        assert!(plan["uso_sms"].as_u64() <= plan["sms"].as_u64());
        assert!(plan["datos"].as_u64().unwrap() <= 16_000);
    } else {
        assert!(body["plan"].is_null());
    }
}

#[tokio::test]
async fn pinned_customer_keeps_balance() {
    let (status, body) = send(get("/gio/cliente/525554094045")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(body["balance"].is_number());
    assert!(body["plan"].is_null());
}

#[tokio::test]
async fn customer_out_of_range_is_404() {
    let (status, body) = send(get("/gio/cliente/11111111")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert!(body["plan"].is_null());
    assert!(body["balance"].is_null());
}

#[tokio::test]
async fn customer_bad_pattern_is_400() {
    let (status, _) = send(get("/gio/cliente/0123456789")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn undecodable_msisdn_segment_keeps_the_envelope() {
    let (status, body) = send(get("/gio/cliente/%FF")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["plan"].is_null());
    assert_eq!(body["errors"][0]["code"], 7001);
}

#[tokio::test]
async fn gio_routes_require_api_key() {
    let req = Request::builder()
        .uri("/gio/facturacion/5215512345678")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["facturacion"].is_null());
    assert_eq!(body["errors"][0]["code"], 7001);
}

#[tokio::test]
async fn out_of_range_msisdn_is_404_on_every_line_operation() {
    let number = "11111111";

    let req = Request::builder()
        .method("PUT")
        .uri(format!("/gio/bloquear/{number}"))
        .header("X-API-Key", api_key())
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["folio"].is_null());

    let (status, body) = send(with_json(
        "POST",
        &format!("/gio/reactivar/{number}"),
        json!({ "folio": "123456" }),
        Some(api_key()),
    ))
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["folio"].is_null());

    let (status, body) = send(get(&format!("/gio/facturacion/{number}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["facturacion"].is_null());
    assert_eq!(body["errors"][0]["code"], 7002);
}

#[tokio::test]
async fn giophone_prefix_serves_the_same_contract() {
    let (_, gio) = send(get("/gio/cliente/5215512345678")).await;
    let (status, giophone) = send(get("/giophone/cliente/5215512345678")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(gio, giophone);
}

#[tokio::test]
async fn block_returns_padded_folio() {
    let req = Request::builder()
        .method("PUT")
        .uri("/gio/bloquear/5215512345678")
        .header("X-API-Key", api_key())
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    if body["success"] == true {
        let folio = body["folio"].as_str().unwrap();
        assert_eq!(folio.len(), 6);
        let value: u64 = folio.parse().unwrap();
        assert!((100_000..=900_000).contains(&value));
    } else {
        assert!(body["folio"].is_null());
    }
}

#[tokio::test]
async fn reactivate_validates_folio() {
    let uri = "/gio/reactivar/5215512345678";

    let (status, body) =
        send(with_json("POST", uri, json!({ "folio": "123456" }), Some(api_key()))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["success"].is_boolean());

    let (status, body) =
        send(with_json("POST", uri, json!({ "folio": "12345" }), Some(api_key()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["folio"].is_null());

    let (status, _) =
        send(with_json("POST", uri, json!({ "folio": "950000" }), Some(api_key()))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn billing_due_date_follows_cutoff() {
    let (status, body) = send(get("/gio/facturacion/5215512345678")).await;
    assert_eq!(status, StatusCode::OK);
    if body["success"] == true {
        let bill = &body["facturacion"];
        let corte = chrono::NaiveDate::parse_from_str(bill["fecha_corte"].as_str().unwrap(), "%Y-%m-%d").unwrap();
        let vence = chrono::NaiveDate::parse_from_str(bill["fecha_vencimiento"].as_str().unwrap(), "%Y-%m-%d").unwrap();
        assert_eq!(vence - corte, chrono::Duration::days(30));
        assert!(bill["nombre"].is_string());
        assert!(bill["direccion"].is_string());
        assert!(bill["saldo"].is_number());
    } else {
        assert!(body["facturacion"].is_null());
    }
}

#[tokio::test]
async fn pinned_billing_fails() {
    let (status, body) = send(get("/gio/facturacion/525554094045")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false, "facturacion": null }));
}

// ── Plumbing ───────────────────────────────────────────────────

#[tokio::test]
async fn health_needs_no_key() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (status, body) = send(get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn wrong_method_is_json_405() {
    let (status, body) = send(get("/gio/bloquear/5215512345678")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"][0]["message"], "Method Not Allowed");
}

#[tokio::test]
async fn handler_panic_becomes_internal_error() {
    let app = axum::Router::new()
        .route("/boom", get_route(|| async { panic!("boom") as () }))
        .layer(CatchPanicLayer::custom(panic_response));
    let req = Request::builder().uri("/boom").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({ "success": false, "errors": [{ "code": 7000, "message": "Internal Server Error" }] })
    );
}

#[tokio::test]
async fn responses_carry_request_id() {
    let resp = build_test_app().oneshot(get("/health")).await.unwrap();
    let id = resp.headers().get(REQUEST_ID_HEADER).expect("request id header");
    assert_eq!(id.to_str().unwrap().len(), 36);
}
