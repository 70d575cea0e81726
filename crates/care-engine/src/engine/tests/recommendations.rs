use super::common::*;
use crate::engine::domain::{AlertSeverity, CareLevel, MedicationCompliance, RiskLevel};
use crate::engine::recommendations::recommend;
use crate::engine::rule_tables::RuleTables;

fn tier_block(tier: CareLevel) -> Vec<String> {
    RuleTables
        .tier_recommendations()
        .iter()
        .find(|(level, _)| *level == tier)
        .map(|(_, lines)| lines.iter().map(|line| line.to_string()).collect())
        .expect("tier block present")
}

#[test]
fn minimal_risk_emits_only_tier_boilerplate() {
    let set = recommend(&RuleTables, &minimal_risk_record(), CareLevel::Simple)
        .expect("recommendations build");

    assert!(set.alerts.is_empty());
    assert_eq!(set.recommendations, tier_block(CareLevel::Simple));
}

#[test]
fn high_risk_fires_every_trigger_in_declared_order() {
    let set = recommend(&RuleTables, &high_risk_record(), CareLevel::Specialized)
        .expect("recommendations build");

    let severities: Vec<AlertSeverity> = set.alerts.iter().map(|alert| alert.severity).collect();
    assert_eq!(
        severities,
        vec![
            AlertSeverity::Warning,
            AlertSeverity::Critical,
            AlertSeverity::Critical
        ]
    );
    assert!(set.alerts[0].message.contains("medication"));
    assert!(set.alerts[1].message.contains("cognitive"));
    assert!(set.alerts[2].message.contains("fall risk"));

    let block = tier_block(CareLevel::Specialized);
    assert_eq!(set.recommendations.len(), 6 + block.len());
    assert!(set.recommendations[0].contains("medication management"));
    assert!(set.recommendations[2].contains("neuropsychological"));
    assert!(set.recommendations[4].contains("home safety"));
    assert_eq!(&set.recommendations[6..], block.as_slice());
}

#[test]
fn triggers_fire_independently() {
    let mut record = minimal_risk_record();
    record.fall_risk = RiskLevel::High;

    let set = recommend(&RuleTables, &record, CareLevel::Routine).expect("build");

    assert_eq!(set.alerts.len(), 1);
    assert_eq!(set.alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(set.recommendations.len(), 2 + tier_block(CareLevel::Routine).len());
}

#[test]
fn cognitive_trigger_uses_strict_threshold() {
    let mut record = minimal_risk_record();
    record.cognitive_score = 18;
    let at_threshold = recommend(&RuleTables, &record, CareLevel::Simple).expect("build");
    assert!(at_threshold.alerts.is_empty());

    record.cognitive_score = 17;
    let below = recommend(&RuleTables, &record, CareLevel::Simple).expect("build");
    assert_eq!(below.alerts.len(), 1);
    assert_eq!(below.alerts[0].severity, AlertSeverity::Critical);
}

#[test]
fn fair_compliance_does_not_trigger_medication_rule() {
    let mut record = minimal_risk_record();
    record.medication_compliance = MedicationCompliance::Fair;

    let set = recommend(&RuleTables, &record, CareLevel::Simple).expect("build");

    assert!(set.alerts.is_empty());
}

#[test]
fn each_tier_selects_its_own_block() {
    for tier in CareLevel::ordered() {
        let set = recommend(&RuleTables, &minimal_risk_record(), tier).expect("build");
        assert_eq!(set.recommendations, tier_block(tier));
    }
}
