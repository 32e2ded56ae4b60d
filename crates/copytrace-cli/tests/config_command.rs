use anyhow::Result;
use assert_cmd::Command;
use copytrace_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_config_show_defaults_when_missing() -> Result<()> {
    let world = TestWorld::new().json();

    let json = world.run(&["config", "show"])?.json()?;
    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["config"]["display"]["page_size"], 100);
    assert_eq!(json["content"]["config"]["backend"]["timeout_secs"], 300);
    assert_eq!(json["content"]["config"]["display"]["tier_scheme"], "confidence");
    Ok(())
}

#[test]
fn test_config_init_writes_once() -> Result<()> {
    let world = TestWorld::new().json();
    let path = world.data_dir().join("config.toml");

    let json = world.run(&["config", "init"])?.json()?;
    assert_eq!(json["content"]["written"], true);
    assert!(path.exists());

    std::fs::write(&path, "[display]\npage_size = 25\n")?;
    let json = world.run(&["config", "init"])?.json()?;
    assert_eq!(json["content"]["written"], false);
    assert_eq!(json["content"]["config"]["display"]["page_size"], 25);

    let json = world.run(&["config", "init", "--force"])?.json()?;
    assert_eq!(json["content"]["written"], true);
    assert_eq!(json["content"]["config"]["display"]["page_size"], 100);
    Ok(())
}

#[test]
fn test_config_show_applies_backend_env() -> Result<()> {
    let world = TestWorld::new()
        .json()
        .with_backend("http://backend.test:9000");

    let json = world.run(&["config", "show"])?.json()?;
    assert_eq!(
        json["content"]["config"]["backend"]["base_url"],
        "http://backend.test:9000"
    );
    Ok(())
}

#[test]
fn test_invalid_thresholds_are_rejected() -> Result<()> {
    let world = TestWorld::new().with_file(
        "config.toml",
        "[display.thresholds]\nhigh = 0.4\nmedium = 0.5\nlow = 0.3\n",
    );

    let result = world.run(&["config", "show"])?;
    assert!(!result.success());
    assert!(result.stderr().contains("Invalid tier thresholds"));
    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_help_lists_commands() {
    Command::cargo_bin("copytrace")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("analyze")
                .and(predicate::str::contains("results"))
                .and(predicate::str::contains("browse"))
                .and(predicate::str::contains("transactions"))
                .and(predicate::str::contains("export")),
        );
}

#[test]
#[allow(deprecated)]
fn test_unknown_sort_column_is_rejected() {
    Command::cargo_bin("copytrace")
        .unwrap()
        .args(["results", "--sort", "volume"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'volume'"));
}
