//! Built-in sample catalog used when no dashboard source is configured.
//!
//! Everything is fixed: timestamps are offsets from `sample_reference()`
//! and check statuses follow a constant pattern, so the sample renders
//! identically on every run.

use chrono::{DateTime, Duration, TimeZone, Utc};
use qualis_types::{
    Agent, AgentStatus, Check, CheckStatus, DashboardData, DataLayer, DataObject, HistoryRun,
    QualityMetric, RunStatus, Trend,
};

/// id, agent, minutes before reference, status, duration, data object, version
type SampleRun = (
    &'static str,
    &'static str,
    i64,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const SAMPLE_RUNS: [SampleRun; 5] = [
    ("run-1", "Data Quality Agent", 15, "pass", "2m 15s", "do-1", "v1.2.3"),
    ("run-2", "Data Transfer Agent", 5, "pass", "45s", "do-2", "v2.0.1"),
    ("run-3", "Data Quality Agent", 60, "pass", "2m 10s", "do-1", "v1.2.2"),
    ("run-4", "Data Transfer Agent", 120, "fail", "1m 5s", "do-2", "v2.0.0"),
    ("run-5", "Data Quality Agent", 240, "pass", "2m 30s", "do-3", "v1.5.0"),
];

const CHECK_NAMES: [&str; 5] = [
    "Null Check",
    "Uniqueness",
    "Format Validation",
    "Range Check",
    "Referential Integrity",
];

/// Instant the sample data is anchored to. Relative times for the sample
/// are computed against this, not the wall clock.
pub fn sample_reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

pub fn sample_dashboard() -> DashboardData {
    let now = sample_reference();
    let minutes_ago = |m: i64| now - Duration::minutes(m);

    DashboardData {
        agents: vec![
            agent("agent-1", "Data Quality Agent", minutes_ago(15)),
            agent("agent-2", "Data Transfer Agent", minutes_ago(5)),
        ],
        history_runs: SAMPLE_RUNS
            .iter()
            .map(|(id, agent_name, minutes, status, duration, object_id, version)| HistoryRun {
                id: id.to_string(),
                agent_name: agent_name.to_string(),
                timestamp: minutes_ago(*minutes),
                status: RunStatus::from(*status),
                duration: duration.to_string(),
                data_object_id: object_id.to_string(),
                data_object_version: version.to_string(),
            })
            .collect(),
        data_objects: vec![
            DataObject {
                id: "do-1".to_string(),
                name: "customers".to_string(),
                version: "1.2.3".to_string(),
                layer: DataLayer::Raw,
                description: "Raw customer data ingested from CRM system.".to_string(),
                checks: checks(
                    now,
                    &[
                        CheckStatus::Passed,
                        CheckStatus::Passed,
                        CheckStatus::Warning,
                        CheckStatus::Passed,
                        CheckStatus::Passed,
                    ],
                ),
                quality_metrics: vec![
                    metric("Freshness", "15m ago", Trend::Stable),
                    metric("Completeness", "98.5%", Trend::Up),
                    metric("Accuracy", "92.1%", Trend::Down),
                    metric("Validity", "99.7%", Trend::Stable),
                ],
            },
            DataObject {
                id: "do-2".to_string(),
                name: "orders".to_string(),
                version: "2.0.1".to_string(),
                layer: DataLayer::Defined,
                description: "Cleaned and structured customer order information.".to_string(),
                checks: checks(
                    now,
                    &[
                        CheckStatus::Passed,
                        CheckStatus::Passed,
                        CheckStatus::Passed,
                        CheckStatus::Failed,
                        CheckStatus::Passed,
                        CheckStatus::Passed,
                        CheckStatus::Warning,
                        CheckStatus::Passed,
                    ],
                ),
                quality_metrics: vec![
                    metric("Freshness", "30m ago", Trend::Stable),
                    metric("Completeness", "99.8%", Trend::Up),
                    metric("Accuracy", "99.5%", Trend::Up),
                    metric("Validity", "100%", Trend::Stable),
                ],
            },
            DataObject {
                id: "do-3".to_string(),
                name: "monthly_revenue".to_string(),
                version: "1.5.0".to_string(),
                layer: DataLayer::Derived,
                description: "Aggregated monthly revenue report for analytics.".to_string(),
                checks: checks(
                    now,
                    &[
                        CheckStatus::Passed,
                        CheckStatus::Passed,
                        CheckStatus::Passed,
                        CheckStatus::Passed,
                    ],
                ),
                quality_metrics: vec![
                    metric("Freshness", "1h ago", Trend::Stable),
                    metric("Completeness", "100%", Trend::Stable),
                    metric("Accuracy", "100%", Trend::Stable),
                    metric("Validity", "100%", Trend::Stable),
                ],
            },
        ],
    }
}

fn agent(id: &str, name: &str, last_run: DateTime<Utc>) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        status: AgentStatus::Active,
        last_run,
    }
}

fn checks(now: DateTime<Utc>, statuses: &[CheckStatus]) -> Vec<Check> {
    statuses
        .iter()
        .enumerate()
        .map(|(i, status)| Check {
            id: format!("check-{}", i),
            name: CHECK_NAMES[i % CHECK_NAMES.len()].to_string(),
            status: status.clone(),
            timestamp: now - Duration::hours(2 * (i as i64 + 1)),
        })
        .collect()
}

fn metric(name: &str, value: &str, trend: Trend) -> QualityMetric {
    QualityMetric {
        name: name.to_string(),
        value: value.to_string(),
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_deterministic() {
        assert_eq!(sample_dashboard(), sample_dashboard());
    }

    #[test]
    fn test_sample_shape() {
        let data = sample_dashboard();
        assert_eq!(data.agents.len(), 2);
        assert_eq!(data.history_runs.len(), 5);
        assert_eq!(data.data_objects.len(), 3);

        let orders = data.find_data_object("do-2").expect("orders present");
        assert_eq!(orders.checks.len(), 8);
        assert_eq!(orders.checks[5].name, "Null Check");
        assert_eq!(orders.quality_metrics[3].value, "100%");
    }

    #[test]
    fn test_runs_reference_known_objects() {
        let data = sample_dashboard();
        for run in &data.history_runs {
            assert!(data.find_data_object(&run.data_object_id).is_some());
        }
    }
}
