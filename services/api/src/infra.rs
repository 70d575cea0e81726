use care_engine::engine::{AssessmentSubmission, ComplianceDomain};
use care_engine::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// On-disk evaluation request, same shape as the HTTP body.
#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationFile {
    pub(crate) record: AssessmentSubmission,
    #[serde(default)]
    pub(crate) domains: Vec<ComplianceDomain>,
}

pub(crate) fn load_evaluation_file<P: AsRef<Path>>(path: P) -> Result<EvaluationFile, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_evaluation_file(&raw)
}

pub(crate) fn parse_evaluation_file(raw: &str) -> Result<EvaluationFile, AppError> {
    Ok(serde_json::from_str(raw)?)
}
