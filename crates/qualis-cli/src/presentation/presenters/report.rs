use qualis_engine::{check_consistency, check_label, tally_outcomes};
use qualis_types::{CheckResult, Report};

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ReportViewModel, ResultRowViewModel, StatusBadge,
    ValidateViewModel,
};

pub fn present_report(report: &Report) -> CommandResultViewModel<ReportViewModel> {
    let consistency = check_consistency(report);
    let summary = report.summary;

    let content = ReportViewModel {
        job_id: report.job_id.clone(),
        data_ref: report.data_ref.clone(),
        summary,
        results: report.results.iter().map(result_row).collect(),
        issues: consistency.issues,
    };

    let mut result = CommandResultViewModel::new(content);

    if !result.content.issues.is_empty() {
        result = result
            .with_badge(StatusBadge::error("Summary does not match the results"))
            .with_suggestion(
                Guidance::new("See which counts disagree").with_command("qualis validate"),
            );
    } else if summary.total_checks == 0 {
        result = result.with_badge(StatusBadge::info("Report contains no checks"));
    } else if summary.failed_checks > 0 {
        result = result.with_badge(StatusBadge::warning(format!(
            "{} of {} checks failed",
            summary.failed_checks, summary.total_checks
        )));
    } else {
        result = result.with_badge(StatusBadge::success(format!(
            "All {} checks passed",
            summary.total_checks
        )));
    }

    result
}

fn result_row(result: &CheckResult) -> ResultRowViewModel {
    ResultRowViewModel {
        label: check_label(&result.check),
        check_type: result.check.type_tag().to_string(),
        column: result.check.column().to_string(),
        outcome: result.outcome.to_string(),
        details: result.details.clone(),
    }
}

pub fn present_validation(report: &Report) -> CommandResultViewModel<ValidateViewModel> {
    let consistency = check_consistency(report);
    let consistent = consistency.is_consistent();

    let content = ValidateViewModel {
        job_id: report.job_id.clone(),
        summary: report.summary,
        tally: tally_outcomes(&report.results),
        consistent,
        issues: consistency.issues,
    };

    let result = CommandResultViewModel::new(content);

    if consistent {
        result.with_badge(StatusBadge::success("Summary matches the results"))
    } else {
        let label = format!("{} inconsistencies found", result.content.issues.len());
        result
            .with_badge(StatusBadge::error(label))
            .with_suggestion(Guidance::new(
                "The producer's summary cannot be trusted for this run; re-run the check job",
            ))
    }
}
