use serde::Serialize;

use super::domain::{AssessmentRecord, CareLevel, FunctionalImpact, MedicationCompliance, RiskLevel};
use super::error::EngineError;

/// Upper bounds (exclusive) for the cognitive buckets, lowest bound first.
const COGNITIVE_BUCKETS: [(u8, u8); 4] = [(12, 4), (18, 3), (24, 2), (26, 1)];

/// Minimum score per tier, most intensive first. The last entry must start at zero.
const CARE_LEVEL_THRESHOLDS: [(u8, CareLevel); 4] = [
    (10, CareLevel::Specialized),
    (7, CareLevel::Advanced),
    (4, CareLevel::Routine),
    (0, CareLevel::Simple),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComplexityFactor {
    Cognition,
    FunctionalImpact,
    FallRisk,
    MedicationCompliance,
    SocialIsolation,
}

/// One factor's contribution to the complexity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub factor: ComplexityFactor,
    pub points: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityScore {
    pub total: u8,
    pub components: Vec<ScoreComponent>,
}

pub fn score(record: &AssessmentRecord) -> Result<ComplexityScore, EngineError> {
    record.validate()?;

    let components = vec![
        ScoreComponent {
            factor: ComplexityFactor::Cognition,
            points: cognition_points(record.cognitive_score),
            notes: format!("cognitive score {}/30", record.cognitive_score),
        },
        ScoreComponent {
            factor: ComplexityFactor::FunctionalImpact,
            points: functional_points(record.functional_impact),
            notes: format!("{} functional impact", record.functional_impact),
        },
        ScoreComponent {
            factor: ComplexityFactor::FallRisk,
            points: risk_points(record.fall_risk, 3),
            notes: format!("{} fall risk", record.fall_risk),
        },
        ScoreComponent {
            factor: ComplexityFactor::MedicationCompliance,
            points: compliance_points(record.medication_compliance),
            notes: format!("{} medication compliance", record.medication_compliance),
        },
        ScoreComponent {
            factor: ComplexityFactor::SocialIsolation,
            points: risk_points(record.social_isolation, 2),
            notes: format!("{} social isolation", record.social_isolation),
        },
    ];

    let total = components.iter().map(|component| component.points).sum();
    Ok(ComplexityScore { total, components })
}

pub fn classify(score: u8) -> CareLevel {
    CARE_LEVEL_THRESHOLDS
        .iter()
        .find(|(minimum, _)| score >= *minimum)
        .map(|(_, level)| *level)
        .unwrap_or(CareLevel::Simple)
}

fn cognition_points(cognitive_score: u8) -> u8 {
    COGNITIVE_BUCKETS
        .iter()
        .find(|(upper, _)| cognitive_score < *upper)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

fn functional_points(impact: FunctionalImpact) -> u8 {
    match impact {
        FunctionalImpact::Severe => 4,
        FunctionalImpact::Moderate => 3,
        FunctionalImpact::Mild => 2,
        FunctionalImpact::None => 0,
    }
}

fn risk_points(level: RiskLevel, high: u8) -> u8 {
    match level {
        RiskLevel::High => high,
        RiskLevel::Moderate => high - 1,
        RiskLevel::Low => 0,
    }
}

fn compliance_points(compliance: MedicationCompliance) -> u8 {
    match compliance {
        MedicationCompliance::Poor => 2,
        MedicationCompliance::Fair => 1,
        MedicationCompliance::Good => 0,
    }
}
