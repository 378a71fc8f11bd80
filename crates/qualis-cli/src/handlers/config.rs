use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use qualis_runtime::Config;
use std::path::Path;

pub fn show(config_path: &Path, ctx: &HandlerContext) -> Result<()> {
    let exists = config_path.exists();
    let config = Config::load_from(config_path)?;

    let view_model = presenters::present_config(config_path, exists, &config);
    ctx.render(view_model)
}

pub fn init(config_path: &Path, force: bool, ctx: &HandlerContext) -> Result<()> {
    let exists = config_path.exists();
    if exists && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite it.",
            config_path.display()
        );
    }

    let config = Config::default();
    config.save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");

    let view_model = presenters::present_config_init(config_path, &config, exists);
    ctx.render(view_model)
}

/// What to do next when no subcommand was given.
pub fn guidance(config_path: &Path, ctx: &HandlerContext) -> Result<()> {
    let view_model = presenters::present_guidance(config_path, config_path.exists());
    ctx.render(view_model)
}
