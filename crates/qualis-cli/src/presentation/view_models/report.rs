use qualis_engine::{ConsistencyIssue, OutcomeTally};
use qualis_types::ReportSummary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportViewModel {
    pub job_id: String,
    pub data_ref: String,
    /// As embedded by the producer, not recomputed
    pub summary: ReportSummary,
    pub results: Vec<ResultRowViewModel>,
    /// Empty when the summary agrees with the results
    pub issues: Vec<ConsistencyIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultRowViewModel {
    pub label: String,
    pub check_type: String,
    pub column: String,
    pub outcome: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateViewModel {
    pub job_id: String,
    pub summary: ReportSummary,
    /// Counts recomputed from the results
    pub tally: OutcomeTally,
    pub consistent: bool,
    pub issues: Vec<ConsistencyIssue>,
}
