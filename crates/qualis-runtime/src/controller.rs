use qualis_types::Report;
use std::sync::Arc;
use tracing::error;

use crate::error::FetchError;
use crate::fetch::fetch_report;
use crate::source::ReportSource;

/// The only message shown to the user when a report cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load data quality report. Please check the API and try again.";

/// A failed load: the user-facing message plus the preserved cause.
#[derive(Debug)]
pub struct LoadFailure {
    pub message: &'static str,
    pub cause: FetchError,
}

/// What the report view can show. Exactly one state at a time; the
/// report itself is an immutable shared snapshot.
#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Ready(Arc<Report>),
    Failed(Arc<LoadFailure>),
}

impl ViewState {
    pub fn report(&self) -> Option<&Arc<Report>> {
        match self {
            ViewState::Ready(report) => Some(report),
            ViewState::Loading | ViewState::Failed(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

impl From<Result<Report, FetchError>> for ViewState {
    fn from(result: Result<Report, FetchError>) -> Self {
        match result {
            Ok(report) => ViewState::Ready(Arc::new(report)),
            Err(cause) => {
                error!(error = %cause, "failed to load data quality report");
                ViewState::Failed(Arc::new(LoadFailure {
                    message: LOAD_FAILURE_MESSAGE,
                    cause,
                }))
            }
        }
    }
}

/// Owns the view state for one report source.
///
/// Each `load` replaces the state value wholesale; snapshots handed out
/// earlier keep pointing at the report they were taken from.
pub struct ReportController {
    source: ReportSource,
    state: ViewState,
}

impl ReportController {
    pub fn new(source: ReportSource) -> Self {
        Self {
            source,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Cheap clone of the current state for the rendering side
    pub fn snapshot(&self) -> ViewState {
        self.state.clone()
    }

    /// Fetch once and settle into `Ready` or `Failed`.
    pub async fn load(&mut self) -> &ViewState {
        self.state = ViewState::Loading;
        let result = fetch_report(&self.source).await;
        self.state = ViewState::from(result);
        &self.state
    }
}
