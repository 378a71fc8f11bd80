use qualis_types::Report;
use serde::Serialize;

use crate::tally::tally_outcomes;

/// One way the embedded summary disagrees with the results it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsistencyIssue {
    /// `summary.totalChecks` differs from the number of results
    TotalMismatch { declared: u64, actual: u64 },
    /// `summary.passedChecks` differs from the recomputed pass count
    PassedMismatch { declared: u64, actual: u64 },
    /// `summary.failedChecks` differs from the recomputed fail count
    FailedMismatch { declared: u64, actual: u64 },
    /// Declared passed + failed does not add up to declared total
    SummaryArithmetic {
        passed: u64,
        failed: u64,
        total: u64,
    },
    /// A result carries an outcome other than pass/fail
    UnrecognizedOutcome { index: usize, outcome: String },
}

impl std::fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsistencyIssue::TotalMismatch { declared, actual } => write!(
                f,
                "summary declares {} checks but the report has {} results",
                declared, actual
            ),
            ConsistencyIssue::PassedMismatch { declared, actual } => write!(
                f,
                "summary declares {} passed checks, results contain {}",
                declared, actual
            ),
            ConsistencyIssue::FailedMismatch { declared, actual } => write!(
                f,
                "summary declares {} failed checks, results contain {}",
                declared, actual
            ),
            ConsistencyIssue::SummaryArithmetic {
                passed,
                failed,
                total,
            } => write!(
                f,
                "passed ({}) + failed ({}) does not equal total ({})",
                passed, failed, total
            ),
            ConsistencyIssue::UnrecognizedOutcome { index, outcome } => {
                write!(f, "result #{} has unrecognized outcome '{}'", index + 1, outcome)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub issues: Vec<ConsistencyIssue>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Recompute counts from `results` and compare them with the embedded
/// summary. The summary is what gets displayed; this only flags reports
/// whose summary cannot be trusted.
pub fn check_consistency(report: &Report) -> ConsistencyReport {
    let summary = report.summary;
    let tally = tally_outcomes(&report.results);
    let actual_total = report.results.len() as u64;
    let mut issues = Vec::new();

    if summary.total_checks != actual_total {
        issues.push(ConsistencyIssue::TotalMismatch {
            declared: summary.total_checks,
            actual: actual_total,
        });
    }
    if summary.passed_checks != tally.passed {
        issues.push(ConsistencyIssue::PassedMismatch {
            declared: summary.passed_checks,
            actual: tally.passed,
        });
    }
    if summary.failed_checks != tally.failed {
        issues.push(ConsistencyIssue::FailedMismatch {
            declared: summary.failed_checks,
            actual: tally.failed,
        });
    }
    if summary.passed_checks.saturating_add(summary.failed_checks) != summary.total_checks {
        issues.push(ConsistencyIssue::SummaryArithmetic {
            passed: summary.passed_checks,
            failed: summary.failed_checks,
            total: summary.total_checks,
        });
    }

    for (index, result) in report.results.iter().enumerate() {
        if !result.outcome.is_recognized() {
            issues.push(ConsistencyIssue::UnrecognizedOutcome {
                index,
                outcome: result.outcome.to_string(),
            });
        }
    }

    ConsistencyReport { issues }
}
