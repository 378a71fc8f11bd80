use super::HandlerContext;
use super::load::load_dashboard;
use crate::presentation::presenters;
use anyhow::{Result, anyhow};
use qualis_runtime::Config;

pub fn handle(config: &Config, id: &str, source: Option<&str>, ctx: &HandlerContext) -> Result<()> {
    let snapshot = load_dashboard(config, source, ctx)?;

    let object = snapshot.data.find_data_object(id).ok_or_else(|| {
        let known: Vec<&str> = snapshot
            .data
            .data_objects
            .iter()
            .map(|object| object.id.as_str())
            .collect();
        anyhow!(
            "Data object not found: {} (known: {})",
            id,
            known.join(", ")
        )
    })?;

    let view_model = presenters::present_data_object(object);
    ctx.render(view_model)
}
