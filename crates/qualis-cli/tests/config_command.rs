use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use qualis_testing::TestWorld;
use qualis_testing::assertions::parse_json;

#[allow(deprecated)]
fn qualis(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("qualis").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn show_without_file_reports_defaults() {
    let world = TestWorld::new();

    qualis(&world)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file, using defaults"))
        .stdout(predicate::str::contains("report_source:    ./output.json"))
        .stdout(predicate::str::contains("(built-in sample catalog)"));
}

#[test]
fn init_writes_defaults_then_refuses_to_overwrite() -> Result<()> {
    let world = TestWorld::new();

    qualis(&world)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file created"));

    let content = std::fs::read_to_string(world.config_path())?;
    assert!(content.contains("report_source = \"./output.json\""));

    qualis(&world)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use --force to overwrite it"));

    qualis(&world)
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file replaced with defaults"));
    Ok(())
}

#[test]
fn show_reflects_written_config() -> Result<()> {
    let world = TestWorld::new();
    world.write_config("https://dq.example.com/output.json", Some("./dashboard.json"))?;

    let output = qualis(&world)
        .args(["--format", "json", "config", "show"])
        .output()?;
    assert!(output.status.success());

    let json = parse_json(&output.stdout)?;
    assert_eq!(json["content"]["exists"], true);
    assert_eq!(
        json["content"]["report_source"],
        "https://dq.example.com/output.json"
    );
    assert_eq!(json["content"]["dashboard_source"], "./dashboard.json");
    Ok(())
}

#[test]
fn config_path_from_environment() -> Result<()> {
    let world = TestWorld::new();
    let env_config = world.root().join("env").join("config.toml");
    std::fs::create_dir_all(env_config.parent().unwrap())?;
    std::fs::write(&env_config, "report_source = \"./from-env.json\"\n")?;

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("qualis").unwrap();
    cmd.current_dir(world.root())
        .env("QUALIS_CONFIG", &env_config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("./from-env.json"));
    Ok(())
}

#[test]
fn invalid_config_is_an_error() -> Result<()> {
    let world = TestWorld::new();
    std::fs::create_dir_all(world.config_path().parent().unwrap())?;
    std::fs::write(world.config_path(), "report_source = [")?;

    qualis(&world)
        .arg("report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
    Ok(())
}

#[test]
fn no_subcommand_prints_guidance() {
    let world = TestWorld::new();

    qualis(&world)
        .assert()
        .success()
        .stdout(predicate::str::contains("data-quality report viewer"))
        .stdout(predicate::str::contains("qualis config init"))
        .stdout(predicate::str::contains("qualis report"));
}
