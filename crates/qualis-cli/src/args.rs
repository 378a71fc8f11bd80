use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qualis")]
#[command(about = "View data-quality reports, agents and run history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $QUALIS_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Diagnostic log level on stderr; load failure causes show at `error`
    #[arg(long, default_value = "off", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the latest data-quality report
    Report {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Check that the report summary matches its results
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Agents and data objects at a glance
    Dashboard {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Recent agent runs
    History {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Checks, metrics and chart for one data object
    Object {
        /// Data object id (e.g. do-1)
        id: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,

    /// Write a config file with default values
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    #[arg(
        long,
        help = "URL or file path to read from, overriding the config file"
    )]
    pub source: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "Minimal output (one line, for scripting)",
        group = "view_mode"
    )]
    pub quiet: bool,

    #[arg(long, help = "Verbose output (all metadata)", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.quiet {
            ViewMode::Minimal
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}
