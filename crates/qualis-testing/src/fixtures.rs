//! Report and dashboard documents in the producer's wire format.
//!
//! Builders return `serde_json::Value` so tests can mutate a field before
//! writing the document out or serving it.

use anyhow::Result;
use qualis_types::{DashboardData, DashboardEnvelope, Report};
use serde_json::{Value, json};

/// Three checks on `customers.csv`: `age` is out of range, the rest pass.
pub fn failing_report() -> Value {
    json!({
        "jobId": "job-42",
        "dataRef": "customers.csv",
        "summary": {"totalChecks": 3, "passedChecks": 2, "failedChecks": 1},
        "results": [
            {"check": {"type": "not_null", "column": "id"}, "outcome": "pass"},
            {
                "check": {"type": "range", "column": "age", "min": 0, "max": 120},
                "outcome": "fail",
                "details": "value 150 exceeds max"
            },
            {
                "check": {"type": "length", "column": "name", "max_length": 50},
                "outcome": "pass"
            }
        ]
    })
}

pub fn passing_report() -> Value {
    json!({
        "jobId": "job-7",
        "dataRef": "orders.parquet",
        "summary": {"totalChecks": 2, "passedChecks": 2, "failedChecks": 0},
        "results": [
            {"check": {"type": "not_null", "column": "order_id"}, "outcome": "pass"},
            {
                "check": {"type": "range", "column": "amount", "min": 0.5, "max": 1000},
                "outcome": "pass"
            }
        ]
    })
}

/// Summary claims everything passed while one result failed.
pub fn inconsistent_report() -> Value {
    let mut report = failing_report();
    report["summary"] = json!({"totalChecks": 3, "passedChecks": 3, "failedChecks": 0});
    report
}

/// A check type and an outcome this viewer has never heard of.
pub fn report_with_unknown_values() -> Value {
    json!({
        "jobId": "job-99",
        "dataRef": "events.csv",
        "summary": {"totalChecks": 1, "passedChecks": 0, "failedChecks": 0},
        "results": [
            {
                "check": {"type": "unique_values", "column": "event_id"},
                "outcome": "skipped"
            }
        ]
    })
}

/// Dashboard envelope with one agent, one run and one data object.
pub fn dashboard_document() -> Value {
    json!({
        "data": {
            "agents": [
                {
                    "id": "agent-9",
                    "name": "Nightly Checker",
                    "status": "Active",
                    "lastRun": "2024-03-10T08:30:00Z"
                }
            ],
            "historyRuns": [
                {
                    "id": "run-77",
                    "agentName": "Nightly Checker",
                    "timestamp": "2024-03-10T08:30:00Z",
                    "status": "fail",
                    "duration": "3m 2s",
                    "dataObjectId": "do-9",
                    "dataObjectVersion": "v0.9.0"
                }
            ],
            "dataObjects": [
                {
                    "id": "do-9",
                    "name": "invoices",
                    "version": "0.9.0",
                    "layer": "Defined",
                    "description": "Invoices joined with customer accounts.",
                    "checks": [
                        {
                            "id": "check-0",
                            "name": "Null Check",
                            "status": "pass",
                            "timestamp": "2024-03-10T06:30:00Z"
                        },
                        {
                            "id": "check-1",
                            "name": "Range Check",
                            "status": "fail",
                            "timestamp": "2024-03-10T04:30:00Z"
                        }
                    ],
                    "qualityMetrics": [
                        {"name": "Completeness", "value": "97.5%", "trend": "down"},
                        {"name": "Freshness", "value": "2h ago", "trend": "stable"}
                    ]
                }
            ]
        }
    })
}

pub fn to_report(value: &Value) -> Result<Report> {
    Ok(serde_json::from_value(value.clone())?)
}

pub fn to_dashboard(value: &Value) -> Result<DashboardData> {
    let envelope: DashboardEnvelope = serde_json::from_value(value.clone())?;
    Ok(envelope.data)
}
