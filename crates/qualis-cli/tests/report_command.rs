use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use qualis_testing::assertions::{
    assert_badge_level, assert_result_count, assert_result_labels, parse_json,
};
use qualis_testing::{StubServer, TestWorld, fixtures};

const LOAD_FAILURE: &str =
    "Failed to load data quality report. Please check the API and try again.";

#[allow(deprecated)]
fn qualis(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("qualis").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn report_renders_failed_range_check() {
    let world = TestWorld::new().with_report("output.json", &fixtures::failing_report());

    qualis(&world)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("job-42"))
        .stdout(predicate::str::contains("customers.csv"))
        .stdout(
            predicate::str::is_match(r"Range \(0 - 120\)\s+age\s+fail\s+value 150 exceeds max")
                .unwrap(),
        )
        .stdout(predicate::str::contains("1 of 3 checks failed"));
}

#[test]
fn report_reads_configured_source() {
    let world = TestWorld::new()
        .with_report("reports/latest.json", &fixtures::passing_report())
        .with_report_source("./reports/latest.json");

    qualis(&world)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 2 checks passed"))
        .stdout(predicate::str::contains("Range (0.5 - 1000)"));
}

#[test]
fn source_flag_overrides_config() -> Result<()> {
    let world = TestWorld::new().with_report_source("./missing.json");
    world.write_document("other.json", &fixtures::passing_report())?;

    qualis(&world)
        .args(["report", "--source", "other.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("job-7"));
    Ok(())
}

#[test]
fn report_over_http() -> Result<()> {
    let server = StubServer::json(&fixtures::failing_report())?;
    let world = TestWorld::new();

    qualis(&world)
        .args(["report", "--source", &server.url("/output.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("value 150 exceeds max"));
    assert_eq!(server.hits(), 1);
    Ok(())
}

#[test]
fn http_500_shows_generic_message() -> Result<()> {
    let server = StubServer::start(500, "internal error")?;
    let world = TestWorld::new();

    qualis(&world)
        .args(["report", "--source", &server.url("/output.json")])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!("Error: {}", LOAD_FAILURE)))
        .stderr(predicate::str::contains("internal error").not());
    Ok(())
}

#[test]
fn http_500_body_is_logged_at_error_level() -> Result<()> {
    let server = StubServer::start(500, "internal error")?;
    let world = TestWorld::new();

    qualis(&world)
        .args(["--log-level", "error", "report", "--source"])
        .arg(server.url("/output.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("internal error"))
        .stderr(predicate::str::contains(LOAD_FAILURE));
    Ok(())
}

#[test]
fn missing_file_shows_generic_message() {
    let world = TestWorld::new();

    qualis(&world)
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains(LOAD_FAILURE));
}

#[test]
fn malformed_report_shows_generic_message() -> Result<()> {
    let world = TestWorld::new();
    std::fs::write(world.root().join("output.json"), "{ not json")?;

    qualis(&world)
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains(LOAD_FAILURE));
    Ok(())
}

#[test]
fn unsupported_scheme_shows_generic_message() {
    let world = TestWorld::new();

    qualis(&world)
        .args(["report", "--source", "ftp://dq.example.com/output.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(LOAD_FAILURE));
}

#[test]
fn report_json_output() -> Result<()> {
    let world = TestWorld::new().with_report("output.json", &fixtures::failing_report());

    let output = qualis(&world).args(["--format", "json", "report"]).output()?;
    assert!(output.status.success());

    let json = parse_json(&output.stdout)?;
    assert_badge_level(&json, "warning")?;
    assert_result_count(&json, 3)?;
    assert_result_labels(&json, &["Not Null", "Range (0 - 120)", "Max Length (50)"])?;
    assert_eq!(json["content"]["summary"]["failedChecks"], 1);
    assert_eq!(json["content"]["results"][1]["details"], "value 150 exceeds max");
    assert!(json["content"]["results"][0]["details"].is_null());
    Ok(())
}

#[test]
fn inconsistent_report_still_renders_with_error_badge() -> Result<()> {
    let world = TestWorld::new().with_report("output.json", &fixtures::inconsistent_report());

    qualis(&world)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary does not match the results"))
        .stdout(predicate::str::contains("qualis validate"));
    Ok(())
}

#[test]
fn unknown_values_render_raw() {
    let world =
        TestWorld::new().with_report("output.json", &fixtures::report_with_unknown_values());

    qualis(&world)
        .args(["report", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unique values"))
        .stdout(predicate::str::contains("skipped"));
}

#[test]
fn quiet_report_is_one_line() {
    let world = TestWorld::new().with_report("output.json", &fixtures::failing_report());

    qualis(&world)
        .args(["report", "--quiet"])
        .assert()
        .success()
        .stdout("job-42 total=3 passed=2 failed=1\n");
}
