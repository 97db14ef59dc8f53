use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dawdle(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dawdle").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("DAWDLE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn excuses_lists_every_excuse() {
    let home = TempDir::new().unwrap();
    dawdle(&home)
        .arg("excuses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Excuses (9 items)"))
        .stdout(predicate::str::contains("Maybe tomorrow is better."));
}

#[test]
fn excuses_as_json() {
    let home = TempDir::new().unwrap();
    let output = dawdle(&home)
        .args(["excuses", "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 9);
    assert_eq!(value["excuses"].as_array().unwrap().len(), 9);
}

#[test]
fn begged_start_counts_until_quit() {
    let home = TempDir::new().unwrap();
    dawdle(&home)
        .args(["start", "2", "--beg"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(You begged.)"))
        .stdout(predicate::str::contains("Stopped with"))
        .stdout(predicate::str::contains("after 0 excuses."));
}

#[test]
fn reset_from_stdin_goes_back_to_idle() {
    let home = TempDir::new().unwrap();
    dawdle(&home)
        .args(["start", "1", "--beg"])
        .write_stdin("reset\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset. You can try again when ready."))
        .stdout(predicate::str::contains("Stopped, after 0 excuses."));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    dawdle(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join(".dawdle").join("config.yaml").exists());

    dawdle(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    dawdle(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_minutes: 5"));
}

#[test]
fn config_path_honours_override() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("elsewhere.yaml");
    dawdle(&home)
        .args(["config", "path", "--config"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere.yaml"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("broken.yaml");
    std::fs::write(&custom, "timer: [not, a, map]\n").unwrap();

    dawdle(&home)
        .args(["excuses", "--config"])
        .arg(&custom)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    dawdle(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dawdle"));
}
