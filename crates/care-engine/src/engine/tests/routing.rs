use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::engine::router::{engine_router, evaluate_handler, EvaluationRequest};
use crate::engine::{DecisionEngine, EngineConfig, MissingFieldPolicy};

fn evaluate_request(body: serde_json::Value) -> Request<Body> {
    Request::post("/api/v1/assessments/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_route_returns_validation_result() {
    let router = engine_router(Arc::new(engine()));

    let response = router
        .oneshot(evaluate_request(json!({
            "record": high_risk_submission(),
            "domains": sample_domains(),
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["substitutedDefaults"], json!([]));
    let result = &body["result"];
    assert_eq!(result["careLevel"], "specialized");
    assert_eq!(result["complexityScore"], 15);
    assert_eq!(result["alerts"][0]["severity"], "warning");
    assert_eq!(result["drugInteractions"][0]["severity"], "major");
    assert_eq!(result["emergencyProtocol"]["responseTime"], "5 minutes");
    assert_eq!(result["outcomeMetrics"]["patientSatisfaction"]["target"], 90);
    assert_eq!(result["compliance"]["overallCompleteness"], 83);
    assert_eq!(result["compliance"]["status"], "partially-compliant");
    assert_eq!(result["compliance"]["criticalGaps"], json!([]));
}

#[tokio::test]
async fn evaluate_route_rejects_missing_fields_by_default() {
    let router = engine_router(Arc::new(engine()));

    let response = router
        .oneshot(evaluate_request(json!({
            "record": { "cognitiveScore": 22 },
            "domains": sample_domains(),
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["field"], "functionalImpact");
}

#[tokio::test]
async fn lenient_engine_reports_substituted_defaults() {
    let engine = DecisionEngine::new(EngineConfig {
        missing_fields: MissingFieldPolicy::AssumeLeastSevere,
        ..EngineConfig::default()
    });
    let request = EvaluationRequest {
        record: crate::engine::AssessmentSubmission {
            cognitive_score: Some(15),
            ..Default::default()
        },
        domains: sample_domains(),
    };

    let response = evaluate_handler(State(Arc::new(engine)), Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["substitutedDefaults"],
        json!([
            "functionalImpact",
            "fallRisk",
            "medicationCompliance",
            "socialIsolation"
        ])
    );
    assert_eq!(body["result"]["complexityScore"], 3);
    assert_eq!(body["result"]["careLevel"], "simple");
}

#[tokio::test]
async fn evaluate_handler_rejects_empty_domains() {
    let request = EvaluationRequest {
        record: high_risk_submission(),
        domains: Vec::new(),
    };

    let response = evaluate_handler(State(Arc::new(engine())), Json(request)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["field"], "domains");
}

#[tokio::test]
async fn rule_table_routes_expose_catalog_and_interactions() {
    let router = engine_router(Arc::new(engine()));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/rule-tables/domains")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["version"], crate::engine::RULE_TABLES_VERSION);
    assert_eq!(body["domains"].as_array().map(Vec::len), Some(8));

    let response = router
        .oneshot(
            Request::get("/api/v1/rule-tables/interactions")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let body = read_json_body(response).await;
    assert_eq!(body["interactions"][0]["drugs"], json!(["warfarin", "aspirin"]));
}
