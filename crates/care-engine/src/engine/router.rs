use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ComplianceDomain;
use super::error::EngineError;
use super::intake::AssessmentSubmission;
use super::DecisionEngine;

#[derive(Debug, Deserialize)]
pub struct EvaluationRequest {
    pub record: AssessmentSubmission,
    #[serde(default)]
    pub domains: Vec<ComplianceDomain>,
}

/// Router exposing evaluation and read-only rule table endpoints.
pub fn engine_router(engine: Arc<DecisionEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessments/evaluate", post(evaluate_handler))
        .route("/api/v1/rule-tables/domains", get(domain_catalog_handler))
        .route(
            "/api/v1/rule-tables/interactions",
            get(interaction_table_handler),
        )
        .with_state(engine)
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<DecisionEngine>>,
    Json(request): Json<EvaluationRequest>,
) -> Response {
    match engine.evaluate_submission(request.record, &request.domains) {
        Ok(evaluation) => (StatusCode::OK, Json(evaluation)).into_response(),
        Err(error @ EngineError::InvalidInput { .. }) => {
            let payload = json!({
                "error": error.to_string(),
                "field": error.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(error @ EngineError::InvalidState(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn domain_catalog_handler(
    State(engine): State<Arc<DecisionEngine>>,
) -> Json<serde_json::Value> {
    let tables = engine.tables();
    Json(json!({
        "version": tables.version(),
        "domains": tables.domain_catalog(),
    }))
}

pub(crate) async fn interaction_table_handler(
    State(engine): State<Arc<DecisionEngine>>,
) -> Json<serde_json::Value> {
    let tables = engine.tables();
    Json(json!({
        "version": tables.version(),
        "interactions": tables.drug_interactions(),
    }))
}
