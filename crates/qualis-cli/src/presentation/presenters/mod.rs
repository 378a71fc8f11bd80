pub mod config;
pub mod dashboard;
pub mod report;

pub use config::{present_config, present_config_init, present_guidance};
pub use dashboard::{present_dashboard, present_data_object, present_history};
pub use report::{present_report, present_validation};
