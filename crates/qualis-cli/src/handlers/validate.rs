use super::HandlerContext;
use super::load::load_report;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use qualis_runtime::Config;

/// Render the comparison, then fail the process when the summary is off.
pub fn handle(config: &Config, source: Option<&str>, ctx: &HandlerContext) -> Result<()> {
    let report = load_report(config, source, ctx)?;
    let view_model = presenters::present_validation(&report);

    let issues = view_model.content.issues.len();
    ctx.render(view_model)?;

    if issues > 0 {
        bail!(
            "report {} is inconsistent: {} issue(s) found",
            report.job_id,
            issues
        );
    }
    Ok(())
}
