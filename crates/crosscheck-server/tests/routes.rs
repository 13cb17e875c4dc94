//! Route-level tests driving the router directly with `tower::oneshot`.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use crosscheck_adapters::AdapterRegistry;
use crosscheck_config::CrosscheckConfig;
use crosscheck_core::Engine;
use crosscheck_protocol::Platform;
use crosscheck_server::router;
use crosscheck_test_utils::{StaticAdapter, sample_record};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn test_router() -> axum::Router {
    let registry = AdapterRegistry::new();
    registry.register(Arc::new(StaticAdapter::new(
        Platform::TicketTracker,
        vec![sample_record(
            Platform::TicketTracker,
            "Security controls task. Required: MFA for all accounts",
        )],
    )));
    registry.register(Arc::new(StaticAdapter::new(
        Platform::Erp,
        vec![sample_record(
            Platform::Erp,
            "Contract permits basic authentication for vendor portal",
        )],
    )));
    let engine = Engine::new(&CrosscheckConfig::default(), registry);
    router(Arc::new(engine))
}

async fn get_json(path: &str) -> (StatusCode, Value) {
    let response = test_router()
        .oneshot(Request::get(path).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn monitor_returns_platform_activity() {
    let (status, body) = get_json("/monitor").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["platforms_monitored"], 2);
    assert_eq!(body["total_records_collected"], 2);
    assert_eq!(body["platforms"][0]["platform"], "ticket_tracker");
    assert_eq!(body["platforms"][0]["items"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn grc_validation_returns_findings() {
    let (status, body) = get_json("/grc-validation").await;
    assert_eq!(status, StatusCode::OK);
    let findings = body.as_array().expect("findings array");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["severity"], "high");
    assert_eq!(findings[0]["items_count"], 2);
    assert_eq!(findings[0]["compliance_framework"], "SOC2, ISO27001");
}

#[tokio::test]
async fn intelligence_report_carries_risk_and_insights() {
    let (status, body) = get_json("/intelligence-report").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_assessment"]["overall_risk"], "high");
    assert_eq!(body["risk_assessment"]["total_records_analyzed"], 2);
    assert!(body["insights"].as_array().is_some_and(|i| !i.is_empty()));
}

#[tokio::test]
async fn activity_feed_returns_previewed_entries() {
    let (status, body) = get_json("/activity-feed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["activities_count"], 2);
    assert!(body["activities"][0]["content_preview"].is_string());
}

#[tokio::test]
async fn platform_detail_resolves_by_slug() {
    let (status, body) = get_json("/platform/erp").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["platform"], "erp");
    assert_eq!(body["label"], "ERP");
    assert_eq!(body["total_records"], 1);
}

#[tokio::test]
async fn unknown_platform_yields_structured_404() {
    let (status, body) = get_json("/platform/mainframe").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "unknown_platform");
    assert!(body["message"].as_str().expect("message").contains("mainframe"));
}

#[tokio::test]
async fn discrepancy_summary_groups_by_severity() {
    let (status, body) = get_json("/discrepancies/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_discrepancies"], 1);
    assert_eq!(body["severity_distribution"]["high"], 1);
    assert_eq!(body["framework_distribution"]["SOC2, ISO27001"], 1);
}
