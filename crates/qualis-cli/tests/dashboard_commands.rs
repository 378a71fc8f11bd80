use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use qualis_testing::assertions::{assert_badge_level, parse_json};
use qualis_testing::{StubServer, TestWorld, fixtures};

#[allow(deprecated)]
fn qualis(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("qualis").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn dashboard_uses_sample_catalog_without_source() {
    let world = TestWorld::new();

    qualis(&world)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 agent(s), 3 data object(s)"))
        .stdout(predicate::str::contains("Data Transfer Agent"))
        .stdout(predicate::str::contains("15 minutes ago"))
        .stdout(predicate::str::contains("monthly_revenue"))
        .stdout(predicate::str::contains("built-in sample catalog"));
}

#[test]
fn sample_output_is_stable_across_runs() -> Result<()> {
    let world = TestWorld::new();

    let first = qualis(&world).args(["--format", "json", "dashboard"]).output()?;
    let second = qualis(&world).args(["--format", "json", "dashboard"]).output()?;
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn history_table_uses_full_timestamps() {
    let world = TestWorld::new();

    qualis(&world)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 run(s), 1 failed"))
        .stdout(predicate::str::contains("2024-06-01 11:45:00"))
        .stdout(predicate::str::contains("do-2 v2.0.0"));
}

#[test]
fn history_quiet_lists_run_ids() {
    let world = TestWorld::new();

    qualis(&world)
        .args(["history", "--quiet"])
        .assert()
        .success()
        .stdout("run-1\nrun-2\nrun-3\nrun-4\nrun-5\n");
}

#[test]
fn object_detail_from_sample() {
    let world = TestWorld::new();

    qualis(&world)
        .args(["object", "do-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 8 checks failed"))
        .stdout(predicate::str::contains("Referential Integrity"))
        .stdout(predicate::str::contains("2024-06-01 04:00"))
        .stdout(predicate::str::contains("Metric Chart"));
}

#[test]
fn object_json_carries_chart_values() -> Result<()> {
    let world = TestWorld::new();

    let output = qualis(&world)
        .args(["--format", "json", "object", "do-1"])
        .output()?;
    assert!(output.status.success());

    let json = parse_json(&output.stdout)?;
    assert_badge_level(&json, "warning")?;
    let values: Vec<f64> = json["content"]["chart"]
        .as_array()
        .map(|points| points.iter().filter_map(|p| p["value"].as_f64()).collect())
        .unwrap_or_default();
    assert_eq!(values, [15.0, 98.5, 92.1, 99.7]);
    assert_eq!(json["content"]["tally"]["warning"], 1);
    Ok(())
}

#[test]
fn unknown_object_fails() {
    let world = TestWorld::new();

    qualis(&world)
        .args(["object", "do-404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data object not found: do-404"))
        .stderr(predicate::str::contains("do-1, do-2, do-3"));
}

#[test]
fn dashboard_from_http_source() -> Result<()> {
    let server = StubServer::json(&fixtures::dashboard_document())?;
    let world = TestWorld::new();
    world.write_config("./output.json", Some(&server.url("/api/v1/dashboard-data")))?;

    qualis(&world)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nightly Checker"))
        .stdout(predicate::str::contains("invoices"))
        .stdout(predicate::str::contains("built-in sample catalog").not());
    Ok(())
}

#[test]
fn dashboard_http_failure_shows_generic_message() -> Result<()> {
    let server = StubServer::start(503, "maintenance")?;
    let world = TestWorld::new();

    qualis(&world)
        .args(["history", "--source", &server.url("/api/v1/dashboard-data")])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to load dashboard data. Please check the API and try again.",
        ));
    Ok(())
}
