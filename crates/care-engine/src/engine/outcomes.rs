use std::collections::BTreeMap;

use super::domain::{CareLevel, OutcomeMetric};
use super::error::EngineError;
use super::rule_tables::{
    RuleTables, FUNCTIONAL_IMPROVEMENT, MEDICATION_ADHERENCE, PATIENT_SATISFACTION,
};

pub type OutcomeMetrics = BTreeMap<String, OutcomeMetric>;

/// Baseline targets with the tier-specific overwrites applied.
pub fn adjust(tables: &RuleTables, tier: CareLevel) -> Result<OutcomeMetrics, EngineError> {
    let mut metrics: OutcomeMetrics = tables
        .outcome_baselines()
        .iter()
        .map(|(key, metric)| (key.to_string(), *metric))
        .collect();

    match tier {
        CareLevel::Specialized => {
            set_target(&mut metrics, PATIENT_SATISFACTION, 90)?;
            set_target(&mut metrics, FUNCTIONAL_IMPROVEMENT, 60)?;
            set_target(&mut metrics, MEDICATION_ADHERENCE, 95)?;
        }
        CareLevel::Simple => {
            set_target(&mut metrics, FUNCTIONAL_IMPROVEMENT, 85)?;
        }
        CareLevel::Routine | CareLevel::Advanced => {}
    }

    Ok(metrics)
}

fn set_target(metrics: &mut OutcomeMetrics, key: &str, target: u8) -> Result<(), EngineError> {
    let metric = metrics
        .get_mut(key)
        .ok_or_else(|| EngineError::InvalidState(format!("missing outcome baseline '{key}'")))?;
    metric.target = target;
    Ok(())
}
