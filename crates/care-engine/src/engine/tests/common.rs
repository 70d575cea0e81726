use axum::response::Response;
use serde_json::Value;

use crate::engine::domain::{
    AssessmentRecord, ComplianceDomain, ComplianceLevel, FunctionalImpact, MedicationCompliance,
    RiskLevel,
};
use crate::engine::intake::AssessmentSubmission;
use crate::engine::{DecisionEngine, EngineConfig};

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::new(EngineConfig::default())
}

pub(super) fn minimal_risk_record() -> AssessmentRecord {
    AssessmentRecord {
        cognitive_score: 28,
        functional_impact: FunctionalImpact::None,
        fall_risk: RiskLevel::Low,
        medication_compliance: MedicationCompliance::Good,
        social_isolation: RiskLevel::Low,
        medications: Vec::new(),
    }
}

pub(super) fn high_risk_record() -> AssessmentRecord {
    AssessmentRecord {
        cognitive_score: 10,
        functional_impact: FunctionalImpact::Severe,
        fall_risk: RiskLevel::High,
        medication_compliance: MedicationCompliance::Poor,
        social_isolation: RiskLevel::High,
        medications: vec![
            "Warfarin 5mg".to_string(),
            "Aspirin 81mg".to_string(),
            "Donepezil 10mg".to_string(),
        ],
    }
}

pub(super) fn domain(id: &str, completeness: u8, level: ComplianceLevel) -> ComplianceDomain {
    ComplianceDomain {
        id: id.to_string(),
        name: format!("Domain {id}"),
        completeness,
        compliance_level: level,
    }
}

pub(super) fn sample_domains() -> Vec<ComplianceDomain> {
    vec![
        domain("physical-health", 85, ComplianceLevel::Partial),
        domain("cognitive-status", 95, ComplianceLevel::Full),
        domain("functional-status", 70, ComplianceLevel::Partial),
    ]
}

pub(super) fn high_risk_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        cognitive_score: Some(10),
        functional_impact: Some("severe".to_string()),
        fall_risk: Some("high".to_string()),
        medication_compliance: Some("poor".to_string()),
        social_isolation: Some("high".to_string()),
        medications: Some(vec!["Warfarin 5mg".to_string(), "Aspirin 81mg".to_string()]),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
