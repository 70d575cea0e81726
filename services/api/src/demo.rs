use crate::infra::load_evaluation_file;
use care_engine::config::AppConfig;
use care_engine::engine::{
    domains_from_path, AssessmentRecord, ComplianceDomain, ComplianceLevel, DecisionEngine,
    FunctionalImpact, MedicationCompliance, RiskLevel, SubmissionEvaluation, ValidationResult,
};
use care_engine::error::AppError;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON file holding `{ "record": {...}, "domains": [...] }`
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Optional CSV export of compliance domains; replaces any domains in the JSON input
    #[arg(long)]
    pub(crate) domains_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the raw JSON result after each scenario summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluationEnvelope {
    evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    evaluation: SubmissionEvaluation,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { input, domains_csv } = args;

    let config = AppConfig::load()?;
    let engine = DecisionEngine::new(config.engine);

    let request = load_evaluation_file(input)?;
    let domains = match domains_csv {
        Some(path) => domains_from_path(path)?,
        None => request.domains,
    };

    let evaluation = engine.evaluate_submission(request.record, &domains)?;
    let envelope = EvaluationEnvelope {
        evaluated_at: Utc::now(),
        evaluation,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = DecisionEngine::default();
    let domains = demo_domains();

    println!("Care decision engine demo");
    println!("Rule tables version {}", engine.tables().version());

    for (title, record) in [
        ("Minimal-risk assessment", minimal_risk_record()),
        ("High-risk assessment", high_risk_record()),
    ] {
        let result = engine.evaluate(&record, &domains)?;
        render_result(title, &result);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    let engine = DecisionEngine::default();
    let tables = engine.tables();

    println!("Rule tables version {}", tables.version());
    println!("\nCompliance domains");
    for domain in tables.domain_catalog() {
        println!(
            "- {} ({}) weight {}: {}",
            domain.name, domain.id, domain.weight, domain.description
        );
    }

    println!("\nDrug interactions");
    for rule in tables.drug_interactions() {
        println!(
            "- {} [{:?}]: {}",
            rule.drugs.join(" + "),
            rule.severity,
            rule.description
        );
        println!("  Guidance: {}", rule.recommendation);
    }

    Ok(())
}

fn render_result(title: &str, result: &ValidationResult) {
    println!("\n{}", title);
    println!(
        "Complexity score {} -> {}",
        result.complexity_score, result.care_level_label
    );
    for component in &result.score_breakdown {
        println!("  - {:?}: {} ({})", component.factor, component.points, component.notes);
    }

    if result.alerts.is_empty() {
        println!("Alerts: none");
    } else {
        println!("Alerts");
        for alert in &result.alerts {
            println!("  - [{:?}] {}", alert.severity, alert.message);
        }
    }

    println!("Recommendations");
    for recommendation in &result.recommendations {
        println!("  - {}", recommendation);
    }

    if result.drug_interactions.is_empty() {
        println!("Drug interactions: none");
    } else {
        println!("Drug interactions");
        for rule in &result.drug_interactions {
            println!("  - {} [{:?}]", rule.drugs.join(" + "), rule.severity);
        }
    }

    let protocol = &result.emergency_protocol;
    println!("Emergency response within {}", protocol.response_time);
    for level in &protocol.escalation_levels {
        println!("  - {}", level);
    }
    for alert in &protocol.critical_alerts {
        println!("  ! {}", alert);
    }

    println!("Outcome targets");
    for (key, metric) in &result.outcome_metrics {
        println!(
            "  - {} ({}): target {}% | current {}% | {:?}",
            metric.name, key, metric.target, metric.current, metric.trend
        );
    }

    let compliance = &result.compliance;
    println!(
        "Compliance {}% -> {} ({} full, {} partial, {} missing)",
        compliance.overall_completeness,
        compliance.status.label(),
        compliance.fully_compliant,
        compliance.partially_compliant,
        compliance.missing
    );
    if !compliance.critical_gap_names.is_empty() {
        println!("Critical gaps: {}", compliance.critical_gap_names.join(", "));
    }
}

fn minimal_risk_record() -> AssessmentRecord {
    AssessmentRecord {
        cognitive_score: 28,
        functional_impact: FunctionalImpact::None,
        fall_risk: RiskLevel::Low,
        medication_compliance: MedicationCompliance::Good,
        social_isolation: RiskLevel::Low,
        medications: vec!["Metformin 500mg".to_string()],
    }
}

fn high_risk_record() -> AssessmentRecord {
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

fn demo_domains() -> Vec<ComplianceDomain> {
    DecisionEngine::default()
        .tables()
        .domain_catalog()
        .iter()
        .zip([
            (100, ComplianceLevel::Full),
            (92, ComplianceLevel::Partial),
            (96, ComplianceLevel::Full),
            (88, ComplianceLevel::Partial),
            (100, ComplianceLevel::Full),
            (75, ComplianceLevel::Partial),
            (90, ComplianceLevel::Partial),
            (0, ComplianceLevel::Missing),
        ])
        .map(|(definition, (completeness, compliance_level))| ComplianceDomain {
            id: definition.id.to_string(),
            name: definition.name.to_string(),
            completeness,
            compliance_level,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_domains_cover_the_catalog() {
        let domains = demo_domains();
        assert_eq!(domains.len(), 8);
        assert_eq!(domains[7].compliance_level, ComplianceLevel::Missing);
    }

    #[test]
    fn demo_scenarios_evaluate() {
        let engine = DecisionEngine::default();
        let domains = demo_domains();

        let minimal = engine
            .evaluate(&minimal_risk_record(), &domains)
            .expect("minimal scenario evaluates");
        let high = engine
            .evaluate(&high_risk_record(), &domains)
            .expect("high scenario evaluates");

        assert_eq!(minimal.complexity_score, 0);
        assert_eq!(high.complexity_score, 15);
        assert_eq!(
            high.compliance.critical_gap_names,
            vec!["Advance Directives"]
        );
    }
}
