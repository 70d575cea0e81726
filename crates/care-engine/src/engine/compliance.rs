use serde::Serialize;

use super::domain::{ComplianceDomain, ComplianceLevel, ComplianceStatus, ComplianceSummary};
use super::error::EngineError;

pub const DEFAULT_COMPLIANT_MIN: u8 = 95;
pub const DEFAULT_PARTIAL_MIN: u8 = 80;

/// Overall-completeness cut-offs for the compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceThresholds {
    compliant_min: u8,
    partial_min: u8,
}

impl ComplianceThresholds {
    /// Returns `None` unless `partial_min <= compliant_min <= 100`.
    pub fn new(compliant_min: u8, partial_min: u8) -> Option<Self> {
        if compliant_min > 100 || partial_min > compliant_min {
            return None;
        }
        Some(Self {
            compliant_min,
            partial_min,
        })
    }

    pub fn compliant_min(&self) -> u8 {
        self.compliant_min
    }

    pub fn partial_min(&self) -> u8 {
        self.partial_min
    }

    pub fn status_for(&self, overall_completeness: u8) -> ComplianceStatus {
        if overall_completeness >= self.compliant_min {
            ComplianceStatus::Compliant
        } else if overall_completeness >= self.partial_min {
            ComplianceStatus::PartiallyCompliant
        } else {
            ComplianceStatus::NonCompliant
        }
    }
}

impl Default for ComplianceThresholds {
    fn default() -> Self {
        Self {
            compliant_min: DEFAULT_COMPLIANT_MIN,
            partial_min: DEFAULT_PARTIAL_MIN,
        }
    }
}

pub fn validate_domain(domain: &ComplianceDomain) -> Result<(), EngineError> {
    if domain.completeness > 100 {
        return Err(EngineError::invalid_input(
            format!("domains[{}].completeness", domain.id),
            format!("{} is outside 0..=100", domain.completeness),
        ));
    }
    Ok(())
}

pub fn aggregate(
    thresholds: &ComplianceThresholds,
    domains: &[ComplianceDomain],
) -> Result<ComplianceSummary, EngineError> {
    if domains.is_empty() {
        return Err(EngineError::invalid_input(
            "domains",
            "at least one compliance domain is required",
        ));
    }

    let mut total: u64 = 0;
    let mut fully_compliant = 0;
    let mut partially_compliant = 0;
    let mut missing = 0;
    let mut critical_gap_names = Vec::new();

    for domain in domains {
        validate_domain(domain)?;
        total += u64::from(domain.completeness);
        match domain.compliance_level {
            ComplianceLevel::Full => fully_compliant += 1,
            ComplianceLevel::Partial => partially_compliant += 1,
            ComplianceLevel::Missing => {
                missing += 1;
                critical_gap_names.push(domain.name.clone());
            }
        }
    }

    let count = domains.len() as u64;
    // Half-up rounding of total / count in integer arithmetic.
    let overall_completeness = ((total * 2 + count) / (count * 2)) as u8;

    Ok(ComplianceSummary {
        overall_completeness,
        fully_compliant,
        partially_compliant,
        missing,
        status: thresholds.status_for(overall_completeness),
        critical_gap_names,
    })
}
