use chrono::{DateTime, Utc};
use qualis_engine::{chart_series, tally_checks};
use qualis_types::{DashboardData, DataObject, HistoryRun, RunStatus};

use crate::presentation::view_models::{
    CommandResultViewModel, DashboardViewModel, DataObjectSummaryViewModel, DataObjectViewModel,
    Guidance, HistoryViewModel, StatusBadge,
};

fn sample_hint() -> Guidance {
    Guidance::new("Showing the built-in sample catalog; set dashboard_source to read live data")
        .with_command("qualis config show")
}

pub fn present_dashboard(
    data: &DashboardData,
    reference: DateTime<Utc>,
    is_sample: bool,
) -> CommandResultViewModel<DashboardViewModel> {
    let data_objects = data
        .data_objects
        .iter()
        .map(|object| DataObjectSummaryViewModel {
            id: object.id.clone(),
            name: object.name.clone(),
            version: object.version.clone(),
            layer: object.layer.clone(),
            description: object.description.clone(),
            tally: tally_checks(&object.checks),
        })
        .collect();

    let content = DashboardViewModel {
        reference,
        is_sample,
        agents: data.agents.clone(),
        data_objects,
    };

    let label = format!(
        "{} agent(s), {} data object(s)",
        content.agents.len(),
        content.data_objects.len()
    );
    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::info(label));

    if let Some(first) = result.content.data_objects.first() {
        let command = format!("qualis object {}", first.id);
        result =
            result.with_suggestion(Guidance::new("Inspect a data object").with_command(command));
    }
    if is_sample {
        result = result.with_suggestion(sample_hint());
    }

    result
}

pub fn present_history(
    runs: &[HistoryRun],
    is_sample: bool,
) -> CommandResultViewModel<HistoryViewModel> {
    let failed = runs
        .iter()
        .filter(|run| run.status == RunStatus::Failed)
        .count();

    let content = HistoryViewModel {
        is_sample,
        runs: runs.to_vec(),
    };

    let badge = if content.runs.is_empty() {
        StatusBadge::info("No runs recorded")
    } else if failed > 0 {
        StatusBadge::warning(format!("{} run(s), {} failed", content.runs.len(), failed))
    } else {
        StatusBadge::success(format!("{} run(s)", content.runs.len()))
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if is_sample {
        result = result.with_suggestion(sample_hint());
    }
    result
}

pub fn present_data_object(object: &DataObject) -> CommandResultViewModel<DataObjectViewModel> {
    let tally = tally_checks(&object.checks);

    let content = DataObjectViewModel {
        id: object.id.clone(),
        name: object.name.clone(),
        version: object.version.clone(),
        layer: object.layer.clone(),
        description: object.description.clone(),
        tally,
        metrics: object.quality_metrics.clone(),
        checks: object.checks.clone(),
        chart: chart_series(&object.quality_metrics),
    };

    let badge = if tally.failed > 0 {
        StatusBadge::error(format!("{} of {} checks failed", tally.failed, tally.total()))
    } else if tally.warning > 0 {
        StatusBadge::warning(format!(
            "{} of {} checks need attention",
            tally.warning,
            tally.total()
        ))
    } else {
        StatusBadge::success(format!("{} checks passed", tally.passed))
    };

    CommandResultViewModel::new(content).with_badge(badge)
}
