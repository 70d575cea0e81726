//! Versioned clinical rule data. Nothing in here makes decisions; the engine
//! components look entries up and apply them.

use super::domain::{
    CareLevel, DomainDefinition, DrugInteractionRule, InteractionSeverity, MetricTrend,
    OutcomeMetric,
};

pub const RULE_TABLES_VERSION: &str = "2024.3";

pub const FUNCTIONAL_IMPROVEMENT: &str = "functionalImprovement";
pub const PATIENT_SATISFACTION: &str = "patientSatisfaction";
pub const MEDICATION_ADHERENCE: &str = "medicationAdherence";
pub const READMISSION_PREVENTION: &str = "readmissionPrevention";
pub const FALL_PREVENTION: &str = "fallPrevention";

static DRUG_INTERACTIONS: [DrugInteractionRule; 6] = [
    DrugInteractionRule {
        drugs: &["warfarin", "aspirin"],
        severity: InteractionSeverity::Major,
        description: "Concurrent anticoagulant and antiplatelet therapy markedly increases bleeding risk.",
        recommendation: "Monitor INR closely and watch for signs of bleeding; confirm dual therapy is intended with the prescriber.",
    },
    DrugInteractionRule {
        drugs: &["lisinopril", "potassium"],
        severity: InteractionSeverity::Moderate,
        description: "ACE inhibitors reduce potassium excretion; supplementation can cause hyperkalemia.",
        recommendation: "Check serum potassium within one week and periodically thereafter.",
    },
    DrugInteractionRule {
        drugs: &["sertraline", "tramadol"],
        severity: InteractionSeverity::Major,
        description: "Combined serotonergic activity raises the risk of serotonin syndrome and seizures.",
        recommendation: "Consider an alternative analgesic and educate staff on serotonin syndrome symptoms.",
    },
    DrugInteractionRule {
        drugs: &["digoxin", "furosemide"],
        severity: InteractionSeverity::Moderate,
        description: "Loop diuretic induced hypokalemia increases susceptibility to digoxin toxicity.",
        recommendation: "Monitor potassium and digoxin levels; report nausea, confusion, or visual changes.",
    },
    DrugInteractionRule {
        drugs: &["simvastatin", "amlodipine"],
        severity: InteractionSeverity::Minor,
        description: "Amlodipine modestly raises simvastatin exposure.",
        recommendation: "Limit simvastatin to 20 mg daily and monitor for muscle pain.",
    },
    DrugInteractionRule {
        drugs: &["donepezil", "oxybutynin"],
        severity: InteractionSeverity::Moderate,
        description: "Anticholinergic bladder agents oppose cholinesterase inhibitor therapy and can worsen cognition.",
        recommendation: "Review the need for oxybutynin and consider a non-anticholinergic alternative.",
    },
];

static DOMAIN_CATALOG: [DomainDefinition; 8] = [
    DomainDefinition {
        id: "physical-health",
        name: "Physical Health",
        description: "Vital signs, chronic conditions, pain, and sensory status.",
        weight: 15,
    },
    DomainDefinition {
        id: "cognitive-status",
        name: "Cognitive Status",
        description: "Standardized cognitive screening, orientation, and decision-making capacity.",
        weight: 15,
    },
    DomainDefinition {
        id: "functional-status",
        name: "Functional Status",
        description: "Activities of daily living, mobility, and transfer assistance.",
        weight: 15,
    },
    DomainDefinition {
        id: "medication-management",
        name: "Medication Management",
        description: "Medication reconciliation, adherence, and administration support.",
        weight: 15,
    },
    DomainDefinition {
        id: "safety-risk",
        name: "Safety & Risk",
        description: "Fall history, environmental hazards, and elopement risk.",
        weight: 10,
    },
    DomainDefinition {
        id: "psychosocial",
        name: "Psychosocial",
        description: "Mood, behavior, social supports, and isolation screening.",
        weight: 10,
    },
    DomainDefinition {
        id: "nutrition",
        name: "Nutrition & Hydration",
        description: "Weight trends, swallowing, dietary restrictions, and hydration.",
        weight: 10,
    },
    DomainDefinition {
        id: "advance-directives",
        name: "Advance Directives",
        description: "Documented care preferences, code status, and health care proxy.",
        weight: 10,
    },
];

static TIER_RECOMMENDATIONS: [(CareLevel, &[&str]); 4] = [
    (
        CareLevel::Simple,
        &[
            "Continue routine wellness monitoring with the primary care team",
            "Schedule reassessment in 12 months or after any change in condition",
        ],
    ),
    (
        CareLevel::Routine,
        &[
            "Schedule quarterly care plan reviews",
            "Coordinate ongoing monitoring with the primary care physician",
        ],
    ),
    (
        CareLevel::Advanced,
        &[
            "Assign a dedicated care coordinator",
            "Hold monthly interdisciplinary team reviews",
            "Implement an enhanced monitoring protocol",
        ],
    ),
    (
        CareLevel::Specialized,
        &[
            "Initiate 24/7 specialized care coordination",
            "Hold weekly interdisciplinary team conferences",
            "Evaluate placement in a specialized care setting",
        ],
    ),
];

static SPECIALIZED_ESCALATION: [&str; 4] = [
    "Level 1: Immediate bedside nursing response (0-5 minutes)",
    "Level 2: Charge nurse and attending notification (5-10 minutes)",
    "Level 3: Rapid response team activation (10-15 minutes)",
    "Level 4: Emergency medical services transfer (15+ minutes)",
];

static STANDARD_ESCALATION: [&str; 3] = [
    "Level 1: Nursing assessment (0-15 minutes)",
    "Level 2: Supervisor and physician notification (15-30 minutes)",
    "Level 3: Emergency medical services if condition deteriorates (30+ minutes)",
];

static OUTCOME_BASELINES: [(&str, OutcomeMetric); 5] = [
    (
        FUNCTIONAL_IMPROVEMENT,
        OutcomeMetric {
            name: "Functional Improvement",
            target: 75,
            current: 68,
            trend: MetricTrend::Improving,
        },
    ),
    (
        PATIENT_SATISFACTION,
        OutcomeMetric {
            name: "Patient Satisfaction",
            target: 85,
            current: 88,
            trend: MetricTrend::Stable,
        },
    ),
    (
        MEDICATION_ADHERENCE,
        OutcomeMetric {
            name: "Medication Adherence",
            target: 90,
            current: 82,
            trend: MetricTrend::Improving,
        },
    ),
    (
        READMISSION_PREVENTION,
        OutcomeMetric {
            name: "30-Day Readmission Prevention",
            target: 90,
            current: 86,
            trend: MetricTrend::Stable,
        },
    ),
    (
        FALL_PREVENTION,
        OutcomeMetric {
            name: "Fall Prevention",
            target: 95,
            current: 91,
            trend: MetricTrend::Declining,
        },
    ),
];

pub const FALL_RISK_CRITICAL_ALERT: &str =
    "High fall risk: activate fall prevention protocol and bed/chair alarms immediately";
pub const MEDICATION_CRITICAL_ALERT: &str =
    "Medication non-compliance: verify every scheduled dose is administered and documented";

/// Immutable accessors over the embedded rule data.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTables;

impl RuleTables {
    pub fn version(&self) -> &'static str {
        RULE_TABLES_VERSION
    }

    pub fn drug_interactions(&self) -> &'static [DrugInteractionRule] {
        &DRUG_INTERACTIONS
    }

    pub fn domain_catalog(&self) -> &'static [DomainDefinition] {
        &DOMAIN_CATALOG
    }

    pub fn tier_recommendations(&self) -> &'static [(CareLevel, &'static [&'static str])] {
        &TIER_RECOMMENDATIONS
    }

    pub fn specialized_escalation(&self) -> &'static [&'static str] {
        &SPECIALIZED_ESCALATION
    }

    pub fn standard_escalation(&self) -> &'static [&'static str] {
        &STANDARD_ESCALATION
    }

    pub fn outcome_baselines(&self) -> &'static [(&'static str, OutcomeMetric)] {
        &OUTCOME_BASELINES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn interaction_table_has_no_duplicate_drug_sets() {
        let tables = RuleTables;
        let mut seen = HashSet::new();
        for rule in tables.drug_interactions() {
            assert!(rule.drugs.len() >= 2, "rule {:?} pairs too few drugs", rule);
            let mut key: Vec<&str> = rule.drugs.to_vec();
            key.sort_unstable();
            assert!(seen.insert(key), "duplicate drug set {:?}", rule.drugs);
        }
    }

    #[test]
    fn every_tier_has_boilerplate_block() {
        let tables = RuleTables;
        for level in CareLevel::ordered() {
            let block = tables
                .tier_recommendations()
                .iter()
                .find(|(tier, _)| *tier == level)
                .map(|(_, lines)| *lines)
                .expect("tier present");
            assert!((2..=3).contains(&block.len()), "{level:?} block size");
        }
    }

    #[test]
    fn domain_catalog_weights_sum_to_one_hundred() {
        let total: u32 = RuleTables
            .domain_catalog()
            .iter()
            .map(|domain| u32::from(domain.weight))
            .sum();
        assert_eq!(total, 100);
    }
}
