use serde::{Deserialize, Serialize};

use crate::check::CheckDefinition;
use crate::wire::wire_enum;

wire_enum! {
    /// Binary result of a check execution
    pub enum CheckOutcome {
        Pass => "pass",
        Fail => "fail",
    }
}

/// Data-quality report for one run, as emitted by the producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub job_id: String,
    /// Identifies the source dataset the checks ran against
    pub data_ref: String,
    pub summary: ReportSummary,
    pub results: Vec<CheckResult>,
}

/// Counts embedded by the producer. Not trusted blindly: see
/// `qualis_engine::check_consistency`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_checks: u64,
    pub passed_checks: u64,
    pub failed_checks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: CheckDefinition,
    pub outcome: CheckOutcome,
    /// Free text, usually only present for failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl CheckResult {
    pub fn is_failure(&self) -> bool {
        self.outcome == CheckOutcome::Fail
    }
}
