pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod source;

pub use catalog::{sample_dashboard, sample_reference};
pub use config::{Config, resolve_config_path};
pub use controller::{LOAD_FAILURE_MESSAGE, LoadFailure, ReportController, ViewState};
pub use error::{Error, FetchError, Result};
pub use fetch::{fetch_dashboard, fetch_report};
pub use source::{DEFAULT_REPORT_SOURCE, ReportSource};
