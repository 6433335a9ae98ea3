use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".login-lockout").join("config.json")
}

const BINARY_NAME: &str = "login-lockout";

/// Run a headless script with an isolated home directory.
fn headless(tmp: &tempfile::TempDir, script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("headless")
        .env("HOME", tmp.path()) // simulate different $HOME
        .write_stdin(script)
        .assert()
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Simulated login form with lockout and failure injection"));
}

#[test]
/// Correct credentials log in on the first try.
fn headless_correct_credentials_log_in() {
    let tmp = temp_config_dir();
    headless(&tmp, "login student@college.edu password123\nstatus\n")
        .success()
        .stdout(contains("Login successful! Welcome!"))
        .stdout(contains(
            "status=LoggedIn attempts=0/3 total=1 success=1 fail=0 rate=100.0%",
        ));
}

#[test]
/// Three wrong passwords lock the account, and further logins are rejected without counting.
fn headless_three_failures_lock_account() {
    let tmp = temp_config_dir();
    let script = "\
login student@college.edu wrong1
login student@college.edu wrong2
login student@college.edu wrong3
login student@college.edu password123
status
";
    headless(&tmp, script)
        .success()
        .stdout(contains("Wrong credentials! 2 attempts remaining."))
        .stdout(contains("Wrong credentials! 1 attempts remaining."))
        .stdout(contains("Account locked! Too many failed attempts."))
        .stdout(contains("Account is locked!"))
        .stdout(contains("status=Locked attempts=3/3 total=3 success=0 fail=3"));
}

#[test]
/// Unlock returns to the logged-out state and records a recovery.
fn headless_unlock_records_recovery() {
    let tmp = temp_config_dir();
    let script = "\
login a@b.c x
login a@b.c y
login a@b.c z
unlock
status
";
    headless(&tmp, script)
        .success()
        .stdout(contains("Account unlocked. You can try again!"))
        .stdout(contains("status=LoggedOut attempts=0/3"))
        .stdout(contains("locked_at=- recovered_at="));
}

#[test]
/// Reset clears counters but keeps the failure injection toggle.
fn headless_reset_keeps_failure_toggle() {
    let tmp = temp_config_dir();
    let script = "\
login a@b.c x
failure on
reset
status
";
    headless(&tmp, script).success().stdout(contains(
        "status=LoggedOut attempts=0/3 total=0 success=0 fail=0 rate=0% failure_injection=on",
    ));
}

#[test]
/// Unknown commands are reported and skipped.
fn headless_reports_unknown_command() {
    let tmp = temp_config_dir();
    headless(&tmp, "fly away\nstatus\n")
        .success()
        .stderr(contains("Unknown command: fly away"))
        .stdout(contains("status=LoggedOut"));
}

#[test]
/// Failure injection from the config file is picked up.
fn headless_reads_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{ "failure_injection": true }"#).unwrap();

    headless(&tmp, "status\n")
        .success()
        .stdout(contains("failure_injection=on"));
}

#[test]
/// An invalid config file is an error.
fn headless_rejects_invalid_config() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "not json").unwrap();

    headless(&tmp, "status\n")
        .failure()
        .stderr(contains("Config"));
}

#[test]
/// Login commands on a live session are ignored and leave the counters alone.
fn headless_login_while_logged_in_is_ignored() {
    let tmp = temp_config_dir();
    let script = "\
login student@college.edu password123
submit
login x y
status
";
    headless(&tmp, script)
        .success()
        .stdout(contains("Login successful! Welcome!").count(1))
        .stdout(contains(
            "status=LoggedIn attempts=0/3 total=1 success=1 fail=0 rate=100.0%",
        ));
}

#[test]
/// A password with spaces is taken whole.
fn headless_password_keeps_spaces() {
    let tmp = temp_config_dir();
    let script = "\
email student@college.edu
password password123 and more
submit
status
";
    headless(&tmp, script)
        .success()
        .stdout(contains("Wrong credentials! 2 attempts remaining."))
        .stdout(contains("status=LoggedOut attempts=1/3"));
}

#[test]
/// Session banners stay off stdout.
fn headless_banners_go_to_stderr() {
    let tmp = temp_config_dir();
    headless(&tmp, "status\n")
        .success()
        .stdout(contains("[INFO]").not())
        .stdout(contains("[SUCCESS]").not())
        .stderr(contains("Starting headless mode"))
        .stderr(contains("Login widget exited successfully"));
}
