// qualis renders the JSON report a data-quality run leaves behind.
//
// Reports are read once per invocation and never written back. The
// summary embedded by the producer is displayed as-is; `validate`
// recomputes it from the results and reports any disagreement.
//
// Dashboard, history and object views read a second document (agents,
// runs, data objects). Without a configured source they show a fixed
// sample catalog so the views can be explored offline.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, SourceArgs, ViewModeArgs};
pub use commands::run;
