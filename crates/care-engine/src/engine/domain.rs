use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::EngineError;

/// Highest score the cognitive screening instrument can produce.
pub const MAX_COGNITIVE_SCORE: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionalImpact {
    None,
    Mild,
    Moderate,
    Severe,
}

impl FunctionalImpact {
    /// Least to most severe.
    pub const fn ordered() -> [Self; 4] {
        [Self::None, Self::Mild, Self::Moderate, Self::Severe]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Least to most severe.
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Moderate, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicationCompliance {
    Good,
    Fair,
    Poor,
}

impl MedicationCompliance {
    /// Least to most severe.
    pub const fn ordered() -> [Self; 3] {
        [Self::Good, Self::Fair, Self::Poor]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

macro_rules! impl_label_parsing {
    ($ty:ty, $field:literal) => {
        impl FromStr for $ty {
            type Err = EngineError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let normalized = value.trim().to_ascii_lowercase();
                Self::ordered()
                    .into_iter()
                    .find(|candidate| candidate.label() == normalized)
                    .ok_or_else(|| {
                        EngineError::invalid_input($field, format!("unknown value '{value}'"))
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

impl_label_parsing!(FunctionalImpact, "functionalImpact");
impl_label_parsing!(RiskLevel, "riskLevel");
impl_label_parsing!(MedicationCompliance, "medicationCompliance");

/// Fully validated assessment consumed by every engine component.
///
/// Built either directly by trusted callers or through
/// [`AssessmentIntake`](super::intake::AssessmentIntake), which owns the
/// defaulting rules for partially captured assessments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub cognitive_score: u8,
    pub functional_impact: FunctionalImpact,
    pub fall_risk: RiskLevel,
    pub medication_compliance: MedicationCompliance,
    pub social_isolation: RiskLevel,
    #[serde(default)]
    pub medications: Vec<String>,
}

impl AssessmentRecord {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.cognitive_score > MAX_COGNITIVE_SCORE {
            return Err(EngineError::invalid_input(
                "cognitiveScore",
                format!(
                    "{} is outside 0..={MAX_COGNITIVE_SCORE}",
                    self.cognitive_score
                ),
            ));
        }
        Ok(())
    }
}

/// Care tiers ordered from least to most intensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareLevel {
    Simple,
    Routine,
    Advanced,
    Specialized,
}

impl CareLevel {
    pub const fn ordered() -> [Self; 4] {
        [Self::Simple, Self::Routine, Self::Advanced, Self::Specialized]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "Simple Care",
            Self::Routine => "Routine Care",
            Self::Advanced => "Advanced Care",
            Self::Specialized => "Specialized Care",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Critical,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionSeverity {
    Minor,
    Moderate,
    Major,
}

/// Static interaction pairing; every listed drug must be present to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrugInteractionRule {
    pub drugs: &'static [&'static str],
    pub severity: InteractionSeverity,
    pub description: &'static str,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyProtocol {
    pub response_time: String,
    pub escalation_levels: Vec<String>,
    pub critical_alerts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricTrend {
    Improving,
    Stable,
    Declining,
}

/// Outcome target and latest observed value, both in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeMetric {
    pub name: &'static str,
    pub target: u8,
    pub current: u8,
    pub trend: MetricTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceLevel {
    Full,
    Partial,
    Missing,
}

impl ComplianceLevel {
    pub const fn ordered() -> [Self; 3] {
        [Self::Full, Self::Partial, Self::Missing]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Partial => "partial",
            Self::Missing => "missing",
        }
    }
}

impl_label_parsing!(ComplianceLevel, "complianceLevel");

/// Per-domain completeness supplied by the assessment workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDomain {
    pub id: String,
    pub name: String,
    pub completeness: u8,
    pub compliance_level: ComplianceLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    PartiallyCompliant,
    NonCompliant,
}

impl ComplianceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::PartiallyCompliant => "partially-compliant",
            Self::NonCompliant => "non-compliant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    pub overall_completeness: u8,
    pub fully_compliant: usize,
    pub partially_compliant: usize,
    pub missing: usize,
    pub status: ComplianceStatus,
    #[serde(rename = "criticalGaps")]
    pub critical_gap_names: Vec<String>,
}

/// Catalog entry describing a tracked regulatory domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub weight: u8,
}
