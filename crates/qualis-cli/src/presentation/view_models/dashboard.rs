use chrono::{DateTime, Utc};
use qualis_engine::{ChartPoint, CheckTally};
use qualis_types::{Agent, Check, DataLayer, HistoryRun, QualityMetric};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    /// Instant relative times are measured from
    pub reference: DateTime<Utc>,
    pub is_sample: bool,
    pub agents: Vec<Agent>,
    pub data_objects: Vec<DataObjectSummaryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataObjectSummaryViewModel {
    pub id: String,
    pub name: String,
    pub version: String,
    pub layer: DataLayer,
    pub description: String,
    pub tally: CheckTally,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryViewModel {
    pub is_sample: bool,
    pub runs: Vec<HistoryRun>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataObjectViewModel {
    pub id: String,
    pub name: String,
    pub version: String,
    pub layer: DataLayer,
    pub description: String,
    pub tally: CheckTally,
    pub metrics: Vec<QualityMetric>,
    pub checks: Vec<Check>,
    /// Lossy numeric reading of each metric, for the bar chart only
    pub chart: Vec<ChartPoint>,
}
