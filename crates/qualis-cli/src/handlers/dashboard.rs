use super::HandlerContext;
use super::load::load_dashboard;
use crate::presentation::presenters;
use anyhow::Result;
use qualis_runtime::Config;

pub fn handle(config: &Config, source: Option<&str>, ctx: &HandlerContext) -> Result<()> {
    let snapshot = load_dashboard(config, source, ctx)?;
    let view_model =
        presenters::present_dashboard(&snapshot.data, snapshot.reference, snapshot.is_sample);
    ctx.render(view_model)
}
