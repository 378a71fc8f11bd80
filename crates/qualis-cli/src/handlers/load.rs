use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use qualis_runtime::{
    Config, LOAD_FAILURE_MESSAGE, ReportController, ViewState, fetch_dashboard, sample_dashboard,
    sample_reference,
};
use qualis_types::{DashboardData, Report};
use std::sync::Arc;

use super::HandlerContext;

pub const DASHBOARD_FAILURE_MESSAGE: &str =
    "Failed to load dashboard data. Please check the API and try again.";

/// Load the report once and settle the view state.
///
/// Every failure, including an unusable source string, ends up as the
/// same user-facing message; the cause is logged by the controller.
pub fn load_report(
    config: &Config,
    source_override: Option<&str>,
    ctx: &HandlerContext,
) -> Result<Arc<Report>> {
    let state = match config.report_source(source_override) {
        Ok(source) => {
            let mut controller = ReportController::new(source);
            ctx.block_on(controller.load())?;
            controller.snapshot()
        }
        Err(err) => ViewState::from(Err(err)),
    };

    match state {
        ViewState::Ready(report) => Ok(report),
        ViewState::Failed(failure) => Err(anyhow!(failure.message)),
        ViewState::Loading => Err(anyhow!(LOAD_FAILURE_MESSAGE)),
    }
}

/// Dashboard data plus the instant relative times are measured from.
pub struct DashboardSnapshot {
    pub data: DashboardData,
    pub reference: DateTime<Utc>,
    pub is_sample: bool,
}

pub fn load_dashboard(
    config: &Config,
    source_override: Option<&str>,
    ctx: &HandlerContext,
) -> Result<DashboardSnapshot> {
    let source = config.dashboard_source(source_override).map_err(|err| {
        tracing::error!(error = %err, "invalid dashboard source");
        anyhow!(DASHBOARD_FAILURE_MESSAGE)
    })?;

    let Some(source) = source else {
        tracing::info!("no dashboard source configured, using the sample catalog");
        return Ok(DashboardSnapshot {
            data: sample_dashboard(),
            reference: sample_reference(),
            is_sample: true,
        });
    };

    let data = ctx.block_on(fetch_dashboard(&source))?.map_err(|err| {
        tracing::error!(error = %err, "failed to load dashboard data");
        anyhow!(DASHBOARD_FAILURE_MESSAGE)
    })?;

    Ok(DashboardSnapshot {
        data,
        reference: Utc::now(),
        is_sample: false,
    })
}
