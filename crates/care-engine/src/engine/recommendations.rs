use serde::Serialize;

use super::domain::{Alert, AssessmentRecord, CareLevel, MedicationCompliance, RiskLevel};
use super::error::EngineError;
use super::rule_tables::RuleTables;

/// Cognitive scores below this value trigger the impairment rule.
const COGNITIVE_IMPAIRMENT_THRESHOLD: u8 = 18;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<String>,
    pub alerts: Vec<Alert>,
}

impl RecommendationSet {
    fn fire(&mut self, lines: [&str; 2], alert: Alert) {
        self.recommendations
            .extend(lines.iter().map(|line| line.to_string()));
        self.alerts.push(alert);
    }
}

/// Applies the trigger rules in their fixed order, then the tier block.
pub fn recommend(
    tables: &RuleTables,
    record: &AssessmentRecord,
    tier: CareLevel,
) -> Result<RecommendationSet, EngineError> {
    let mut set = RecommendationSet::default();

    if record.medication_compliance == MedicationCompliance::Poor {
        set.fire(
            [
                "Implement a medication management system with pill organizers or automated dispensing",
                "Schedule weekly medication reconciliation with the consulting pharmacist",
            ],
            Alert::warning("Poor medication compliance increases the risk of adverse drug events"),
        );
    }

    if record.cognitive_score < COGNITIVE_IMPAIRMENT_THRESHOLD {
        set.fire(
            [
                "Refer for comprehensive neuropsychological evaluation",
                "Implement cognitive safety measures and a supervision plan",
            ],
            Alert::critical("Significant cognitive impairment detected: safety assessment required"),
        );
    }

    if record.fall_risk == RiskLevel::High {
        set.fire(
            [
                "Complete a home safety evaluation and install fall prevention equipment",
                "Refer to physical therapy for balance and strength training",
            ],
            Alert::critical("High fall risk: immediate intervention required"),
        );
    }

    let block = tables
        .tier_recommendations()
        .iter()
        .find(|(level, _)| *level == tier)
        .map(|(_, lines)| *lines)
        .ok_or_else(|| {
            EngineError::InvalidState(format!("no recommendation block for {tier:?}"))
        })?;
    set.recommendations
        .extend(block.iter().map(|line| line.to_string()));

    Ok(set)
}
