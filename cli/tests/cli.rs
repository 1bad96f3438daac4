use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `folio` isolated from user configuration, state kept in `dir`
fn folio(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("bin");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("NO_COLOR", "1")
        .env_remove("FOLIO_PRODUCT_NAME")
        .env_remove("FOLIO_DEFAULT_ROUTE")
        .env("FOLIO_LEAVE_MS", "20")
        .env_remove("FOLIO_LOCATION_FILE")
        .env_remove("FOLIO_PREFERENCES_FILE")
        .arg("--location-file")
        .arg(dir.join("location"))
        .arg("--preferences-file")
        .arg(dir.join("preferences.json"));
    cmd
}

#[test]
fn routes_lists_in_order() {
    let dir = TempDir::new().expect("tempdir");
    let output = folio(dir.path()).arg("routes").output().expect("routes");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).expect("utf8");
    let keys: Vec<_> = ["home", "projects", "resume", "contact"]
        .iter()
        .map(|k| text.find(k).expect(k))
        .collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "{}", text);
    assert!(text.contains("(default)"));
}

#[test]
fn current_on_fresh_state_writes_default() {
    let dir = TempDir::new().expect("tempdir");
    folio(dir.path())
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("route: home"))
        .stdout(predicate::str::contains("title: M. Green | Home"));

    let persisted = fs::read_to_string(dir.path().join("location")).expect("location");
    assert_eq!(persisted, "home");
}

#[test]
fn go_persists_and_current_reads_back() {
    let dir = TempDir::new().expect("tempdir");
    folio(dir.path())
        .args(["go", "projects/42?tab=overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("projects/42?tab=overview"))
        .stdout(predicate::str::contains("title: M. Green | Projects"));

    folio(dir.path())
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("route: projects"))
        .stdout(predicate::str::contains("id: 42"))
        .stdout(predicate::str::contains("query: tab=overview"));
}

#[test]
fn go_unknown_route_falls_back_to_home() {
    let dir = TempDir::new().expect("tempdir");
    folio(dir.path()).args(["go", "resume"]).assert().success();
    folio(dir.path())
        .args(["go", "bogus-route"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: M. Green | Home"));

    let persisted = fs::read_to_string(dir.path().join("location")).expect("location");
    assert_eq!(persisted, "home");
}

#[test]
fn product_name_flag_changes_title() {
    let dir = TempDir::new().expect("tempdir");
    folio(dir.path())
        .args(["--product-name", "Studio", "go", "contact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Studio | Contact"));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("folio.json"),
        r#"{ "product_name": "From File", "default_route": "projects" }"#,
    )
    .expect("config");

    folio(dir.path())
        .arg("current")
        .assert()
        .success()
        .stdout(predicate::str::contains("route: projects"))
        .stdout(predicate::str::contains("title: From File | Projects"));
}

#[test]
fn theme_toggle_persists() {
    let dir = TempDir::new().expect("tempdir");
    folio(dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
    folio(dir.path())
        .args(["theme", "--toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    let prefs = fs::read_to_string(dir.path().join("preferences.json")).expect("prefs");
    assert!(prefs.contains("\"THEME\": \"light\""));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().expect("tempdir");
    folio(dir.path())
        .args(["--leave-ms", "999999", "routes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("leave_duration_ms"));
}
