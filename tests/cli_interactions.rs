//! CLI options interaction tests
//!
//! These tests run both binaries end to end with temporary rosters and word
//! lists, and check that option combinations behave as documented.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const ENV_VARS: [&str; 4] = ["STUDENT_ROSTER", "TASKTIMER_WORDLIST", "TASKTIMER_MAX_COUNT", "ENABLE_COLOR"];

/// Run a binary from an empty directory so no stray .env file is picked up
fn create_test_cmd(bin: &str, dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Helper function to write a fixture file into the temp directory
fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

const ROSTER: &str = r#"[
    {"name": "Jakkrit", "birthdate": "2001-10-25"},
    {"name": "Malee", "birthdate": "2001-11-11"},
    {"name": "Kanya", "birthdate": "2000-10-02"},
    {"name": "Liam", "birthdate": "2002-10-19"}
]"#;

#[test]
fn test_birthdays_bundled_roster_for_october() {
    let dir = TempDir::new().unwrap();
    create_test_cmd("birthdays", &dir)
        .args(["--month", "10", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Kanya Phrom will have birthday on 2 October\n\
             Liam O'Brien will have birthday on 19 October\n\
             Jakkrit Thongdee will have birthday on 25 October\n",
        ));
}

#[test]
fn test_birthdays_custom_roster_and_sort_by_name() {
    let dir = TempDir::new().unwrap();
    let roster = write_fixture(&dir, "class.json", ROSTER);

    create_test_cmd("birthdays", &dir)
        .args(["--roster", &roster, "--month", "10", "--sort", "name", "--no-color"])
        .assert()
        .success()
        .stdout(
            "Jakkrit will have birthday on 25 October\n\
             Kanya will have birthday on 2 October\n\
             Liam will have birthday on 19 October\n",
        );
}

#[test]
fn test_birthdays_roster_from_environment() {
    let dir = TempDir::new().unwrap();
    let roster = write_fixture(&dir, "class.json", ROSTER);

    create_test_cmd("birthdays", &dir)
        .env("STUDENT_ROSTER", &roster)
        .args(["--month", "11", "--no-color"])
        .assert()
        .success()
        .stdout("Malee will have birthday on 11 November\n");
}

#[test]
fn test_birthdays_roster_from_env_file() {
    let dir = TempDir::new().unwrap();
    let roster = write_fixture(&dir, "class.json", ROSTER);
    write_fixture(&dir, ".env", &format!("STUDENT_ROSTER={}\n", roster));

    create_test_cmd("birthdays", &dir)
        .args(["--month", "11", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Malee"));
}

#[test]
fn test_birthdays_empty_month_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let roster = write_fixture(&dir, "class.json", ROSTER);

    create_test_cmd("birthdays", &dir)
        .args(["--roster", &roster, "--month", "2", "--no-color"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_birthdays_verbose_header() {
    let dir = TempDir::new().unwrap();
    let roster = write_fixture(&dir, "class.json", ROSTER);

    create_test_cmd("birthdays", &dir)
        .args(["--roster", &roster, "--month", "10", "--no-color", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Birthdays in October"))
        .stdout(predicate::str::contains("3 of 4 students matched"));
}

#[test]
fn test_birthdays_invalid_arguments() {
    let dir = TempDir::new().unwrap();

    create_test_cmd("birthdays", &dir)
        .args(["--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Month must be between 1 and 12"));

    create_test_cmd("birthdays", &dir)
        .args(["--month", "3", "--within", "14", "--no-color"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--month and --within"));

    create_test_cmd("birthdays", &dir)
        .args(["--color", "--no-color"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_birthdays_missing_or_malformed_roster() {
    let dir = TempDir::new().unwrap();

    create_test_cmd("birthdays", &dir)
        .args(["--roster", "missing.json", "--no-color"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("missing.json"));

    let broken = write_fixture(&dir, "broken.json", "{ not json");
    create_test_cmd("birthdays", &dir)
        .args(["--roster", &broken, "--no-color"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_tasktimer_runs_six_tasks() {
    let dir = TempDir::new().unwrap();
    let words = write_fixture(&dir, "words.txt", "a\nbb\nccc\ndddd\neeeee\n");

    let output = create_test_cmd("tasktimer", &dir)
        .args(["--wordlist", &words, "--no-color"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Starting task: ").count(), 6);
    assert_eq!(stdout.matches("Average length of 5 words is 3.00").count(), 4);
    assert_eq!(stdout.matches("Done appending 5 words").count(), 2);
    assert_eq!(stdout.matches("Elapsed time is ").count(), 6);
    assert!(stdout.contains("append 50,000 words to a String using format!"));
}

#[test]
fn test_tasktimer_task_selection_and_cap() {
    let dir = TempDir::new().unwrap();
    let words = write_fixture(&dir, "words.txt", "a\nbb\nccc\ndddd\neeeee\n");

    create_test_cmd("tasktimer", &dir)
        .args(["--wordlist", &words, "--task", "6", "--max-count", "2", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting task: append 2 words to a pre-sized String"))
        .stdout(predicate::str::contains("Done appending 2 words to pre-sized String."))
        .stdout(predicate::str::contains("Average length").not());
}

#[test]
fn test_tasktimer_missing_wordlist_still_succeeds() {
    let dir = TempDir::new().unwrap();

    let output = create_test_cmd("tasktimer", &dir)
        .args(["--wordlist", "nowhere.txt", "--no-color"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Could not open word list nowhere.txt").count(), 6);
    assert_eq!(stdout.matches("Elapsed time is ").count(), 6);
}

#[test]
fn test_tasktimer_bundled_wordlist() {
    let dir = TempDir::new().unwrap();

    create_test_cmd("tasktimer", &dir)
        .args(["--task", "1", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average length of 6,056 words is"));
}

#[test]
fn test_tasktimer_verbose_summary() {
    let dir = TempDir::new().unwrap();
    let words = write_fixture(&dir, "words.txt", "alpha\nbeta\n");

    create_test_cmd("tasktimer", &dir)
        .args(["--wordlist", &words, "--no-color", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fastest:"));
}

#[test]
fn test_tasktimer_invalid_arguments() {
    let dir = TempDir::new().unwrap();

    create_test_cmd("tasktimer", &dir)
        .args(["--task", "7"])
        .assert()
        .failure();

    create_test_cmd("tasktimer", &dir)
        .args(["--max-count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Count must be greater than 0"));

    create_test_cmd("tasktimer", &dir)
        .env("TASKTIMER_MAX_COUNT", "lots")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TASKTIMER_MAX_COUNT"));
}

#[test]
fn test_debug_reports_suspicious_environment() {
    let dir = TempDir::new().unwrap();

    create_test_cmd("birthdays", &dir)
        .env("STUDENT_ROSTER", "  ")
        .args(["--month", "10", "--no-color", "--debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Configuration error: STUDENT_ROSTER cannot be empty"))
        .stdout(predicate::str::contains("Kanya Phrom"));
}

#[test]
fn test_help_lists_environment_variables() {
    let dir = TempDir::new().unwrap();
    create_test_cmd("tasktimer", &dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TASKTIMER_WORDLIST"))
        .stdout(predicate::str::contains("Configuration Priority"));
}

#[test]
fn test_tasktimer_partial_append_after_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, b"one\ntwo\n\xff\n").unwrap();

    create_test_cmd("tasktimer", &dir)
        .args(["--wordlist", path.to_str().unwrap(), "--task", "5", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Read error: "))
        .stdout(predicate::str::contains("Done appending 2 words to String."));
}

#[test]
fn test_version_flags() {
    let dir = TempDir::new().unwrap();
    for bin in ["birthdays", "tasktimer"] {
        create_test_cmd(bin, &dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
