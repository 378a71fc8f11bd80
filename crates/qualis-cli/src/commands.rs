use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::presentation::ViewMode;
use anyhow::Result;
use is_terminal::IsTerminal;
use qualis_runtime::{Config, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let color = !cli.no_color && std::io::stdout().is_terminal();
    owo_colors::set_override(color);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    tracing::debug!(path = %config_path.display(), "resolved config path");

    let Some(command) = cli.command else {
        let ctx = HandlerContext::new(cli.format, ViewMode::default());
        return handlers::config::guidance(&config_path, &ctx);
    };

    let load_config = || Config::load_from(&config_path);

    match command {
        Commands::Report { source, view_mode } => {
            let ctx = HandlerContext::new(cli.format, view_mode.resolve());
            handlers::report::handle(&load_config()?, source.source.as_deref(), &ctx)
        }

        Commands::Validate { source } => {
            let ctx = HandlerContext::new(cli.format, ViewMode::default());
            handlers::validate::handle(&load_config()?, source.source.as_deref(), &ctx)
        }

        Commands::Dashboard { source, view_mode } => {
            let ctx = HandlerContext::new(cli.format, view_mode.resolve());
            handlers::dashboard::handle(&load_config()?, source.source.as_deref(), &ctx)
        }

        Commands::History { source, view_mode } => {
            let ctx = HandlerContext::new(cli.format, view_mode.resolve());
            handlers::history::handle(&load_config()?, source.source.as_deref(), &ctx)
        }

        Commands::Object {
            id,
            source,
            view_mode,
        } => {
            let ctx = HandlerContext::new(cli.format, view_mode.resolve());
            handlers::object::handle(&load_config()?, &id, source.source.as_deref(), &ctx)
        }

        Commands::Config { command } => {
            let ctx = HandlerContext::new(cli.format, ViewMode::default());
            match command {
                ConfigCommand::Show => handlers::config::show(&config_path, &ctx),
                ConfigCommand::Init { force } => {
                    handlers::config::init(&config_path, force, &ctx)
                }
            }
        }
    }
}
