//! Pinned keys fail every time, on every endpoint of their domain.

use labmock_core::{
    config::{BalanceOnFailure, MockConfig},
    request::ReportRequest,
    types::{Folio, Msisdn, ReportNumber},
    MockEngine,
};

const PINNED_MSISDN: &str = "525554094045";

/// Engine with test logging on, so `RUST_LOG=debug` shows each decision.
fn engine() -> MockEngine {
    let _ = env_logger::builder().is_test(true).try_init();
    MockEngine::build_test().unwrap()
}

fn report_request(nombre: &str) -> ReportRequest {
    ReportRequest {
        motivo:          "Motivo".into(),
        nombre:          nombre.into(),
        direccion:       "Direccion".into(),
        numero_contacto: "525512345678".into(),
    }
}

#[test]
fn pinned_report_lookup_fails() {
    let engine = engine();
    let reply = engine.report_status(ReportNumber::new(99_999).unwrap());
    assert_eq!(reply.status, 200);
    assert_eq!(
        serde_json::to_value(&reply.body).unwrap(),
        serde_json::json!({ "success": false, "estado": null })
    );
}

#[test]
fn test_customer_name_never_creates_a_report() {
    let engine = engine();
    for _ in 0..500 {
        let reply = engine.create_report(&report_request("Test"));
        assert_eq!(reply.status, 201);
        assert!(!reply.body.success);
        assert!(reply.body.reporte.is_none());
    }
}

#[test]
fn pinned_msisdn_fails_everywhere() {
    let engine = engine();
    let msisdn = Msisdn::parse(PINNED_MSISDN).unwrap();

    let customer = engine.customer(msisdn).body;
    assert!(!customer.success);
    assert!(customer.plan.is_none());
    assert!(customer.balance.is_some());

    assert!(!engine.block_line(msisdn).unwrap().body.success);
    let folio = Folio::parse("123456").unwrap();
    assert!(!engine.reactivate_line(msisdn, folio).unwrap().body.success);
    assert!(!engine.billing(msisdn).unwrap().body.success);
}

#[test]
fn omitted_balance_policy_applies_to_pinned_msisdn() {
    let config = MockConfig {
        balance_on_failure: BalanceOnFailure::Omitted,
        ..MockConfig::default_test()
    };
    let engine = MockEngine::new(config).unwrap();
    let body = engine.customer(Msisdn::parse(PINNED_MSISDN).unwrap()).body;
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "success": false, "balance": null, "plan": null })
    );
}

#[test]
fn custom_pins_from_config() {
    let config = MockConfig {
        pinned_report: 42,
        pinned_msisdn: "5511112222".into(),
        pinned_customer_name: "QA".into(),
        ..MockConfig::default_test()
    };
    let engine = MockEngine::new(config).unwrap();
    assert!(!engine.report_status(ReportNumber::new(42).unwrap()).body.success);
    assert!(!engine.customer(Msisdn::parse("5511112222").unwrap()).body.success);
    assert!(!engine.create_report(&report_request("QA")).body.success);
}

#[test]
fn zero_success_probability_fails_every_key() {
    let config = MockConfig { success_probability: 0.0, ..MockConfig::default_test() };
    let engine = MockEngine::new(config).unwrap();
    for value in 1..200 {
        assert!(!engine.report_status(ReportNumber::new(value).unwrap()).body.success);
    }
}
