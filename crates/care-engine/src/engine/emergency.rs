use super::domain::{
    AssessmentRecord, CareLevel, EmergencyProtocol, MedicationCompliance, RiskLevel,
};
use super::rule_tables::{RuleTables, FALL_RISK_CRITICAL_ALERT, MEDICATION_CRITICAL_ALERT};

pub fn generate(
    tables: &RuleTables,
    tier: CareLevel,
    record: &AssessmentRecord,
) -> EmergencyProtocol {
    let response_time = match tier {
        CareLevel::Specialized => "5 minutes",
        CareLevel::Advanced => "10 minutes",
        CareLevel::Routine | CareLevel::Simple => "15 minutes",
    };

    let ladder = if tier == CareLevel::Specialized {
        tables.specialized_escalation()
    } else {
        tables.standard_escalation()
    };

    let mut critical_alerts = Vec::new();
    if record.fall_risk == RiskLevel::High {
        critical_alerts.push(FALL_RISK_CRITICAL_ALERT.to_string());
    }
    if record.medication_compliance == MedicationCompliance::Poor {
        critical_alerts.push(MEDICATION_CRITICAL_ALERT.to_string());
    }

    EmergencyProtocol {
        response_time: response_time.to_string(),
        escalation_levels: ladder.iter().map(|level| level.to_string()).collect(),
        critical_alerts,
    }
}
