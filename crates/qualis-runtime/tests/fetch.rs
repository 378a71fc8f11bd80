use anyhow::Result;
use qualis_runtime::{
    FetchError, LOAD_FAILURE_MESSAGE, ReportController, ReportSource, ViewState, fetch_dashboard,
    fetch_report,
};
use qualis_testing::{StubServer, TestWorld, fixtures};
use qualis_types::CheckOutcome;

#[tokio::test]
async fn http_error_status_keeps_status_and_body() -> Result<()> {
    let server = StubServer::start(500, "internal error")?;
    let source = ReportSource::parse(&server.url("/output.json"))?;

    match fetch_report(&source).await {
        Err(FetchError::Transport { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("expected transport error, got {:?}", other),
    }
    assert_eq!(server.hits(), 1, "exactly one attempt, no retry");
    Ok(())
}

#[tokio::test]
async fn http_success_parses_report() -> Result<()> {
    let server = StubServer::json(&fixtures::failing_report())?;
    let source = ReportSource::parse(&server.url("/output.json"))?;

    let report = fetch_report(&source).await?;
    assert_eq!(report.job_id, "job-42");
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.results[1].outcome, CheckOutcome::Fail);
    assert_eq!(
        report.results[1].details.as_deref(),
        Some("value 150 exceeds max")
    );
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() -> Result<()> {
    let server = StubServer::start(200, "{\"jobId\": 42")?;
    let source = ReportSource::parse(&server.url("/output.json"))?;

    assert!(matches!(
        fetch_report(&source).await,
        Err(FetchError::Parse(_))
    ));
    Ok(())
}

#[tokio::test]
async fn missing_field_is_a_parse_error() -> Result<()> {
    let mut document = fixtures::failing_report();
    if let Some(object) = document.as_object_mut() {
        object.remove("summary");
    }
    let server = StubServer::json(&document)?;
    let source = ReportSource::parse(&server.url("/output.json"))?;

    assert!(matches!(
        fetch_report(&source).await,
        Err(FetchError::Parse(_))
    ));
    Ok(())
}

#[tokio::test]
async fn file_source_reads_report() -> Result<()> {
    let world = TestWorld::new();
    let path = world.write_document("output.json", &fixtures::passing_report())?;

    let report = fetch_report(&ReportSource::File(path)).await?;
    assert_eq!(report.job_id, "job-7");
    assert_eq!(report.summary.passed_checks, 2);
    Ok(())
}

#[tokio::test]
async fn missing_file_is_an_io_error() -> Result<()> {
    let world = TestWorld::new();
    let source = ReportSource::File(world.root().join("absent.json"));

    assert!(matches!(
        fetch_report(&source).await,
        Err(FetchError::Io { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn dashboard_envelope_is_unwrapped() -> Result<()> {
    let server = StubServer::json(&fixtures::dashboard_document())?;
    let source = ReportSource::parse(&server.url("/api/v1/dashboard-data"))?;

    let data = fetch_dashboard(&source).await?;
    assert_eq!(data.agents[0].name, "Nightly Checker");
    assert_eq!(data.history_runs.len(), 1);
    assert!(data.find_data_object("do-9").is_some());
    Ok(())
}

#[tokio::test]
async fn controller_settles_ready_then_failed() -> Result<()> {
    let world = TestWorld::new();
    let path = world.write_document("output.json", &fixtures::failing_report())?;

    let mut controller = ReportController::new(ReportSource::File(path.clone()));
    assert!(controller.state().is_loading());

    controller.load().await;
    let first = controller.snapshot();
    assert_eq!(first.report().map(|r| r.job_id.as_str()), Some("job-42"));

    std::fs::remove_file(&path)?;
    controller.load().await;

    match controller.state() {
        ViewState::Failed(failure) => assert_eq!(failure.message, LOAD_FAILURE_MESSAGE),
        other => panic!("expected failed state, got {:?}", other),
    }
    // The earlier snapshot is untouched by the reload.
    assert_eq!(first.report().map(|r| r.results.len()), Some(3));
    Ok(())
}
