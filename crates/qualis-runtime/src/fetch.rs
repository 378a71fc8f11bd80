use qualis_types::{DashboardData, DashboardEnvelope, Report};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::error::FetchError;
use crate::source::ReportSource;

/// Fetch and parse the data-quality report. One attempt, no retry, no cache.
pub async fn fetch_report(source: &ReportSource) -> Result<Report, FetchError> {
    info!(source = %source, "fetching data quality report");
    let report: Report = fetch_document(source).await?;
    info!(
        job_id = %report.job_id,
        results = report.results.len(),
        "data quality report received"
    );
    Ok(report)
}

/// Fetch the dashboard document (`{ "data": { agents, historyRuns, dataObjects } }`).
pub async fn fetch_dashboard(source: &ReportSource) -> Result<DashboardData, FetchError> {
    info!(source = %source, "fetching dashboard data");
    let envelope: DashboardEnvelope = fetch_document(source).await?;
    info!(
        agents = envelope.data.agents.len(),
        runs = envelope.data.history_runs.len(),
        data_objects = envelope.data.data_objects.len(),
        "dashboard data received"
    );
    Ok(envelope.data)
}

async fn fetch_document<T: DeserializeOwned>(source: &ReportSource) -> Result<T, FetchError> {
    let body = read_body(source).await?;
    serde_json::from_str(&body).map_err(|err| {
        error!(source = %source, error = %err, "response body does not match the expected shape");
        FetchError::Parse(err)
    })
}

async fn read_body(source: &ReportSource) -> Result<String, FetchError> {
    match source {
        ReportSource::Http(url) => {
            let response = reqwest::get(url.clone()).await.map_err(|err| {
                error!(source = %source, error = %err, "request failed");
                FetchError::Network(err)
            })?;

            let status = response.status();
            debug!(status = status.as_u16(), "response received");

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!(status = status.as_u16(), body = %body, "endpoint returned an error response");
                return Err(FetchError::Transport {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(response.text().await?)
        }
        ReportSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|err| {
            error!(path = %path.display(), error = %err, "could not read report file");
            FetchError::Io {
                path: path.clone(),
                source: err,
            }
        }),
    }
}
