//! Clinical and compliance decision engine.
//!
//! Every component is a pure function of its inputs plus the embedded
//! [`RuleTables`]. [`DecisionEngine`] wires them into a single evaluation and
//! carries only immutable configuration, so one instance can be shared across
//! request handlers without locking.

pub mod compliance;
pub mod domain;
pub mod emergency;
pub mod error;
pub mod import;
pub mod intake;
pub mod interactions;
pub mod outcomes;
pub mod recommendations;
pub mod router;
pub mod rule_tables;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use compliance::ComplianceThresholds;
pub use domain::{
    Alert, AlertSeverity, AssessmentRecord, CareLevel, ComplianceDomain, ComplianceLevel,
    ComplianceStatus, ComplianceSummary, DomainDefinition, DrugInteractionRule, EmergencyProtocol,
    FunctionalImpact, InteractionSeverity, MedicationCompliance, MetricTrend, OutcomeMetric,
    RiskLevel,
};
pub use error::EngineError;
pub use import::{domains_from_path, domains_from_reader, DomainImportError};
pub use intake::{
    AssessmentIntake, AssessmentSubmission, MissingFieldPolicy, NormalizedAssessment,
};
pub use outcomes::OutcomeMetrics;
pub use router::engine_router;
pub use rule_tables::{RuleTables, RULE_TABLES_VERSION};
pub use scoring::{ComplexityFactor, ComplexityScore, ScoreComponent};

use serde::Serialize;
use tracing::debug;

/// Explicit knobs for an engine instance; nothing is read from the process environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub missing_fields: MissingFieldPolicy,
    pub compliance: ComplianceThresholds,
}

/// Snapshot of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub rule_tables_version: &'static str,
    pub care_level: CareLevel,
    pub care_level_label: &'static str,
    pub complexity_score: u8,
    pub score_breakdown: Vec<ScoreComponent>,
    pub recommendations: Vec<String>,
    pub alerts: Vec<Alert>,
    pub drug_interactions: Vec<DrugInteractionRule>,
    pub emergency_protocol: EmergencyProtocol,
    pub outcome_metrics: OutcomeMetrics,
    pub compliance: ComplianceSummary,
}

/// Result of evaluating a raw submission, including intake substitutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEvaluation {
    pub substituted_defaults: Vec<&'static str>,
    pub result: ValidationResult,
}

#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: EngineConfig,
    tables: RuleTables,
}

impl DecisionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            tables: RuleTables,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    pub fn intake(&self) -> AssessmentIntake {
        AssessmentIntake::with_policy(self.config.missing_fields)
    }

    pub fn score(&self, record: &AssessmentRecord) -> Result<ComplexityScore, EngineError> {
        scoring::score(record)
    }

    pub fn classify(&self, score: u8) -> CareLevel {
        scoring::classify(score)
    }

    pub fn recommend(
        &self,
        record: &AssessmentRecord,
        tier: CareLevel,
    ) -> Result<recommendations::RecommendationSet, EngineError> {
        recommendations::recommend(&self.tables, record, tier)
    }

    pub fn check_interactions<S: AsRef<str>>(
        &self,
        medications: &[S],
    ) -> Vec<DrugInteractionRule> {
        interactions::check(&self.tables, medications)
    }

    pub fn emergency_protocol(
        &self,
        tier: CareLevel,
        record: &AssessmentRecord,
    ) -> EmergencyProtocol {
        emergency::generate(&self.tables, tier, record)
    }

    pub fn outcome_metrics(&self, tier: CareLevel) -> Result<OutcomeMetrics, EngineError> {
        outcomes::adjust(&self.tables, tier)
    }

    pub fn aggregate(
        &self,
        domains: &[ComplianceDomain],
    ) -> Result<ComplianceSummary, EngineError> {
        compliance::aggregate(&self.config.compliance, domains)
    }

    pub fn evaluate(
        &self,
        record: &AssessmentRecord,
        domains: &[ComplianceDomain],
    ) -> Result<ValidationResult, EngineError> {
        let score = self.score(record)?;
        let care_level = self.classify(score.total);
        let recommendations = self.recommend(record, care_level)?;
        let drug_interactions = self.check_interactions(&record.medications);
        let emergency_protocol = self.emergency_protocol(care_level, record);
        let outcome_metrics = self.outcome_metrics(care_level)?;
        let compliance = self.aggregate(domains)?;

        debug!(
            complexity_score = score.total,
            ?care_level,
            alerts = recommendations.alerts.len(),
            interactions = drug_interactions.len(),
            compliance_status = compliance.status.label(),
            "assessment evaluated"
        );

        Ok(ValidationResult {
            rule_tables_version: self.tables.version(),
            care_level,
            care_level_label: care_level.label(),
            complexity_score: score.total,
            score_breakdown: score.components,
            recommendations: recommendations.recommendations,
            alerts: recommendations.alerts,
            drug_interactions,
            emergency_protocol,
            outcome_metrics,
            compliance,
        })
    }

    /// Normalizes a form submission under the configured policy, then evaluates it.
    pub fn evaluate_submission(
        &self,
        submission: AssessmentSubmission,
        domains: &[ComplianceDomain],
    ) -> Result<SubmissionEvaluation, EngineError> {
        let NormalizedAssessment {
            record,
            substituted_defaults,
        } = self.intake().normalize(submission)?;
        let result = self.evaluate(&record, domains)?;
        Ok(SubmissionEvaluation {
            substituted_defaults,
            result,
        })
    }
}
