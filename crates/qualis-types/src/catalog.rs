//! Agent, run history and data-object entities shown on the dashboard.
//!
//! Status enums accept both the lowercase spellings used by the report
//! producer (`pass`, `fail`, `warning`) and the capitalised ones emitted
//! by the dashboard backend (`Success`, `Passed`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire::wire_enum;

wire_enum! {
    pub enum AgentStatus {
        Active => "Active",
        Inactive => "Inactive",
    }
}

wire_enum! {
    /// Outcome of one agent run (summary level, no warning state)
    pub enum RunStatus {
        Success => "pass" | "Success",
        Failed => "fail" | "Failed",
        Running => "Running",
    }
}

wire_enum! {
    /// Status of a detailed check on a data object
    pub enum CheckStatus {
        Passed => "pass" | "Passed",
        Warning => "warning" | "Warning",
        Failed => "fail" | "Failed",
    }
}

wire_enum! {
    /// Maturity layer of a data object
    pub enum DataLayer {
        Raw => "Raw",
        Defined => "Defined",
        Derived => "Derived",
    }
}

wire_enum! {
    pub enum Trend {
        Up => "up",
        Down => "down",
        Stable => "stable",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub status: AgentStatus,
    pub last_run: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRun {
    pub id: String,
    pub agent_name: String,
    pub timestamp: DateTime<Utc>,
    pub status: RunStatus,
    /// Display string such as "2m 15s"
    pub duration: String,
    pub data_object_id: String,
    pub data_object_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub id: String,
    pub name: String,
    pub status: CheckStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetric {
    pub name: String,
    /// Formatted value, possibly with a unit suffix ("98.5%", "15m ago")
    pub value: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataObject {
    pub id: String,
    pub name: String,
    pub version: String,
    pub layer: DataLayer,
    pub description: String,
    #[serde(default)]
    pub checks: Vec<Check>,
    #[serde(default)]
    pub quality_metrics: Vec<QualityMetric>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub history_runs: Vec<HistoryRun>,
    #[serde(default)]
    pub data_objects: Vec<DataObject>,
}

impl DashboardData {
    pub fn find_data_object(&self, id: &str) -> Option<&DataObject> {
        self.data_objects.iter().find(|object| object.id == id)
    }
}

/// `{ "data": { ... } }` wrapper used by the dashboard endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardEnvelope {
    pub data: DashboardData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_aliases_normalize() {
        assert_eq!(RunStatus::from("Success"), RunStatus::Success);
        assert_eq!(RunStatus::from("pass"), RunStatus::Success);
        assert_eq!(CheckStatus::from("Warning"), CheckStatus::Warning);
        assert_eq!(CheckStatus::from("fail"), CheckStatus::Failed);
        assert_eq!(
            DataLayer::from("Curated"),
            DataLayer::Unrecognized("Curated".to_string())
        );
    }

    #[test]
    fn test_canonical_spelling_on_output() {
        let value = serde_json::to_value(RunStatus::from("Failed")).unwrap();
        assert_eq!(value, json!("fail"));

        let value = serde_json::to_value(Trend::from("sideways")).unwrap();
        assert_eq!(value, json!("sideways"));
    }

    #[test]
    fn test_envelope_parses_backend_payload() -> anyhow::Result<()> {
        let payload = json!({
            "data": {
                "agents": [{
                    "id": "agent-1",
                    "name": "Data Quality Agent",
                    "status": "Active",
                    "lastRun": "2024-06-01T11:45:00.000123Z"
                }],
                "historyRuns": [{
                    "id": "run-4",
                    "agentName": "Data Transfer Agent",
                    "timestamp": "2024-06-01T10:00:00Z",
                    "status": "Failed",
                    "duration": "1m 5s",
                    "dataObjectId": "do-2",
                    "dataObjectVersion": "v2.0.0"
                }],
                "dataObjects": [{
                    "id": "do-1",
                    "name": "customers",
                    "version": "1.2.3",
                    "layer": "Raw",
                    "description": "Raw customer data ingested from CRM system.",
                    "checks": [{
                        "id": "check-0",
                        "name": "Null Check",
                        "status": "Passed",
                        "timestamp": "2024-06-01T08:00:00Z"
                    }],
                    "qualityMetrics": [
                        {"name": "Completeness", "value": "98.5%", "trend": "up"}
                    ]
                }]
            }
        });

        let envelope: DashboardEnvelope = serde_json::from_value(payload)?;
        let data = envelope.data;

        assert_eq!(data.agents[0].status, AgentStatus::Active);
        assert_eq!(data.history_runs[0].status, RunStatus::Failed);
        let object = data.find_data_object("do-1").expect("do-1 present");
        assert_eq!(object.layer, DataLayer::Raw);
        assert_eq!(object.checks[0].status, CheckStatus::Passed);
        assert_eq!(object.quality_metrics[0].trend, Trend::Up);
        assert!(data.find_data_object("do-9").is_none());
        Ok(())
    }
}
