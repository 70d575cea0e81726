use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use super::domain::{
    AssessmentRecord, FunctionalImpact, MedicationCompliance, RiskLevel, MAX_COGNITIVE_SCORE,
};
use super::error::EngineError;

/// How the intake treats risk fields the assessor left blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingFieldPolicy {
    /// Blank risk fields are rejected.
    #[default]
    Reject,
    /// Blank risk fields become the least-severe value and are reported.
    AssumeLeastSevere,
}

impl MissingFieldPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Some(Self::Reject),
            "assume-least-severe" | "assume_least_severe" => Some(Self::AssumeLeastSevere),
            _ => None,
        }
    }
}

/// Assessment as captured by the form layer; every field may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSubmission {
    #[serde(default)]
    pub cognitive_score: Option<i64>,
    #[serde(default)]
    pub functional_impact: Option<String>,
    #[serde(default)]
    pub fall_risk: Option<String>,
    #[serde(default)]
    pub medication_compliance: Option<String>,
    #[serde(default)]
    pub social_isolation: Option<String>,
    #[serde(default)]
    pub medications: Option<Vec<String>>,
}

/// Strict record plus an audit trail of substituted defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAssessment {
    pub record: AssessmentRecord,
    pub substituted_defaults: Vec<&'static str>,
}

/// Boundary step turning a submission into an [`AssessmentRecord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentIntake {
    policy: MissingFieldPolicy,
}

impl AssessmentIntake {
    pub fn with_policy(policy: MissingFieldPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingFieldPolicy {
        self.policy
    }

    pub fn normalize(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<NormalizedAssessment, EngineError> {
        let mut substituted_defaults = Vec::new();

        let cognitive_score = match submission.cognitive_score {
            Some(raw) => u8::try_from(raw)
                .ok()
                .filter(|score| *score <= MAX_COGNITIVE_SCORE)
                .ok_or_else(|| {
                    EngineError::invalid_input(
                        "cognitiveScore",
                        format!("{raw} is outside 0..={MAX_COGNITIVE_SCORE}"),
                    )
                })?,
            None => {
                self.substitute("cognitiveScore", &mut substituted_defaults)?;
                MAX_COGNITIVE_SCORE
            }
        };

        let functional_impact = self.parse_field(
            "functionalImpact",
            submission.functional_impact,
            FunctionalImpact::None,
            &mut substituted_defaults,
        )?;
        let fall_risk = self.parse_field(
            "fallRisk",
            submission.fall_risk,
            RiskLevel::Low,
            &mut substituted_defaults,
        )?;
        let medication_compliance = self.parse_field(
            "medicationCompliance",
            submission.medication_compliance,
            MedicationCompliance::Good,
            &mut substituted_defaults,
        )?;
        let social_isolation = self.parse_field(
            "socialIsolation",
            submission.social_isolation,
            RiskLevel::Low,
            &mut substituted_defaults,
        )?;

        let medications = submission
            .medications
            .unwrap_or_default()
            .into_iter()
            .map(|medication| medication.trim().to_string())
            .filter(|medication| !medication.is_empty())
            .collect();

        Ok(NormalizedAssessment {
            record: AssessmentRecord {
                cognitive_score,
                functional_impact,
                fall_risk,
                medication_compliance,
                social_isolation,
                medications,
            },
            substituted_defaults,
        })
    }

    fn parse_field<T: FromStr>(
        &self,
        field: &'static str,
        raw: Option<String>,
        least_severe: T,
        substituted: &mut Vec<&'static str>,
    ) -> Result<T, EngineError> {
        match raw.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value.parse::<T>().map_err(|_| {
                EngineError::invalid_input(field, format!("unknown value '{value}'"))
            }),
            None => {
                self.substitute(field, substituted)?;
                Ok(least_severe)
            }
        }
    }

    fn substitute(
        &self,
        field: &'static str,
        substituted: &mut Vec<&'static str>,
    ) -> Result<(), EngineError> {
        match self.policy {
            MissingFieldPolicy::Reject => {
                Err(EngineError::invalid_input(field, "value is required"))
            }
            MissingFieldPolicy::AssumeLeastSevere => {
                warn!(field, "assessment field missing; assuming least-severe value");
                substituted.push(field);
                Ok(())
            }
        }
    }
}
