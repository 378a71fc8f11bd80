use super::HandlerContext;
use super::load::load_report;
use crate::presentation::presenters;
use anyhow::Result;
use qualis_runtime::Config;

pub fn handle(config: &Config, source: Option<&str>, ctx: &HandlerContext) -> Result<()> {
    let report = load_report(config, source, ctx)?;
    let view_model = presenters::present_report(&report);
    ctx.render(view_model)
}
