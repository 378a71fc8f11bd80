use qualis_types::{Check, CheckOutcome, CheckResult, CheckStatus};
use serde::Serialize;

/// Pass/fail counts over report results.
///
/// Report outcomes have no warning state; values the producer sent that
/// are neither `pass` nor `fail` are counted separately, never folded in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeTally {
    pub passed: u64,
    pub failed: u64,
    pub unrecognized: u64,
}

impl OutcomeTally {
    pub fn total(&self) -> u64 {
        self.passed + self.failed + self.unrecognized
    }
}

/// Passed/warning/failed counts over detailed data-object checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckTally {
    pub passed: u64,
    pub warning: u64,
    pub failed: u64,
    pub unrecognized: u64,
}

impl CheckTally {
    pub fn total(&self) -> u64 {
        self.passed + self.warning + self.failed + self.unrecognized
    }
}

pub fn tally_outcomes(results: &[CheckResult]) -> OutcomeTally {
    results
        .iter()
        .fold(OutcomeTally::default(), |mut tally, result| {
            match result.outcome {
                CheckOutcome::Pass => tally.passed += 1,
                CheckOutcome::Fail => tally.failed += 1,
                CheckOutcome::Unrecognized(_) => tally.unrecognized += 1,
            }
            tally
        })
}

pub fn tally_checks(checks: &[Check]) -> CheckTally {
    checks.iter().fold(CheckTally::default(), |mut tally, check| {
        match check.status {
            CheckStatus::Passed => tally.passed += 1,
            CheckStatus::Warning => tally.warning += 1,
            CheckStatus::Failed => tally.failed += 1,
            CheckStatus::Unrecognized(_) => tally.unrecognized += 1,
        }
        tally
    })
}
