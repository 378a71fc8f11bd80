pub mod common;
pub mod config;
pub mod dashboard;
pub mod report;
pub mod result;

pub use common::{CreateView, Guidance, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigInitViewModel, ConfigViewModel, GuidanceViewModel};
pub use dashboard::{
    DashboardViewModel, DataObjectSummaryViewModel, DataObjectViewModel, HistoryViewModel,
};
pub use report::{ReportViewModel, ResultRowViewModel, ValidateViewModel};
pub use result::CommandResultViewModel;
