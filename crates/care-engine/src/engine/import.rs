use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::compliance::validate_domain;
use super::domain::{ComplianceDomain, ComplianceLevel};
use super::error::EngineError;

#[derive(Debug)]
pub enum DomainImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Invalid { row: usize, source: EngineError },
}

impl std::fmt::Display for DomainImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainImportError::Io(err) => write!(f, "failed to read domain export: {}", err),
            DomainImportError::Csv(err) => write!(f, "invalid domain CSV data: {}", err),
            DomainImportError::Invalid { row, source } => {
                write!(f, "domain row {} rejected: {}", row, source)
            }
        }
    }
}

impl std::error::Error for DomainImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DomainImportError::Io(err) => Some(err),
            DomainImportError::Csv(err) => Some(err),
            DomainImportError::Invalid { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for DomainImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DomainImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct DomainRow {
    id: String,
    name: String,
    completeness: u8,
    compliance_level: String,
}

pub fn domains_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<ComplianceDomain>, DomainImportError> {
    let file = std::fs::File::open(path)?;
    domains_from_reader(file)
}

/// Reads `id,name,completeness,compliance_level` rows, validating each one.
pub fn domains_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<ComplianceDomain>, DomainImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut domains = Vec::new();

    for (index, record) in csv_reader.deserialize::<DomainRow>().enumerate() {
        let row = record?;
        let line = index + 1;
        let compliance_level = row
            .compliance_level
            .parse::<ComplianceLevel>()
            .map_err(|source| DomainImportError::Invalid { row: line, source })?;

        let domain = ComplianceDomain {
            id: row.id,
            name: row.name,
            completeness: row.completeness,
            compliance_level,
        };
        validate_domain(&domain)
            .map_err(|source| DomainImportError::Invalid { row: line, source })?;
        domains.push(domain);
    }

    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn imports_domains_in_file_order() {
        let csv = "id,name,completeness,compliance_level\n\
                   cognitive-status,Cognitive Status,95,Full\n\
                   nutrition, Nutrition & Hydration ,40,missing\n";

        let domains = domains_from_reader(Cursor::new(csv)).expect("csv imports");

        assert_eq!(domains.len(), 2);
        assert_eq!(domains[0].compliance_level, ComplianceLevel::Full);
        assert_eq!(domains[1].name, "Nutrition & Hydration");
        assert_eq!(domains[1].compliance_level, ComplianceLevel::Missing);
    }

    #[test]
    fn rejects_unknown_compliance_level_with_row_number() {
        let csv = "id,name,completeness,compliance_level\n\
                   physical-health,Physical Health,80,partial\n\
                   safety-risk,Safety & Risk,70,unknown\n";

        match domains_from_reader(Cursor::new(csv)) {
            Err(DomainImportError::Invalid { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected invalid row error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_completeness_over_one_hundred() {
        let csv = "id,name,completeness,compliance_level\n\
                   physical-health,Physical Health,120,full\n";

        assert!(matches!(
            domains_from_reader(Cursor::new(csv)),
            Err(DomainImportError::Invalid { row: 1, .. })
        ));
    }
}
