//! Integration tests for `aoc25 machines`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `aoc25` binary.
fn aoc25_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("aoc25");
    path
}

/// Path to a shared fixture file in the workspace `tests/fixtures`.
fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path.to_str().expect("path").to_owned()
}

#[test]
fn machines_example_human() {
    let out = Command::new(aoc25_bin())
        .args(["machines", &fixture("machines.txt")])
        .output()
        .expect("run aoc25 machines");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Configured all machines with 7 presses\nJolted all machines with 33 presses\n"
    );
}

#[test]
fn machines_example_json() {
    let out = Command::new(aoc25_bin())
        .args(["-f", "json", "machines", &fixture("machines.txt")])
        .output()
        .expect("run aoc25 machines");
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["machines"], 3);
    assert_eq!(value["configure_presses"], 7);
    assert_eq!(value["jolt_presses"], 33);
}

#[test]
fn machines_malformed_exit_2() {
    let out = Command::new(aoc25_bin())
        .args(["machines", &fixture("machines_malformed.txt")])
        .output()
        .expect("run aoc25 machines");
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
    assert!(stderr.contains("byte 10"), "stderr: {stderr}");
}

#[test]
fn machines_unsolvable_exit_1() {
    let out = Command::new(aoc25_bin())
        .args(["machines", &fixture("machines_unsolvable.txt")])
        .output()
        .expect("run aoc25 machines");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
    assert!(stderr.contains("inconsistent"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn machines_search_limit_exit_1() {
    let out = Command::new(aoc25_bin())
        .args(["machines", &fixture("machines.txt"), "--max-candidates", "1"])
        .output()
        .expect("run aoc25 machines");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("exceeds the limit"), "stderr: {stderr}");
}

#[test]
fn machines_quiet_and_verbose_conflict() {
    let out = Command::new(aoc25_bin())
        .args(["machines", &fixture("machines.txt"), "-q", "-v"])
        .output()
        .expect("run aoc25 machines");
    assert!(!out.status.success());
}
