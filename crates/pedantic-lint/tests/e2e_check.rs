//! E2E integration tests for the `pedantic-lint` binary.
//!
//! Success messages and JSON go to stdout; findings, summaries and logs
//! go to stderr.

mod common;

use common::{lint_cmd, tempdir, write_file, BASIC_MANIFEST, CLEAN_MANIFEST};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

// ─── check ─────────────────────────────────────────────────────────

#[test]
fn clean_project_succeeds() {
    let dir = tempdir();
    write_file(dir.path(), "pedantic-project.toml", CLEAN_MANIFEST);

    lint_cmd(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(contains("Project has no pedantic issues"))
        .stderr(contains("error:").not());
}

#[test]
fn basic_schema_reports_each_violation() {
    let dir = tempdir();
    write_file(dir.path(), "pedantic-project.toml", BASIC_MANIFEST);

    lint_cmd(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(contains(
            "error: Property nameOfPerson is not snake case. Suggestion: name_of_person",
        ))
        .stderr(contains(
            "error: Node type person is not camel case. Suggestion: Person",
        ))
        .stderr(contains(
            "error: Relationship type best_friend_of is not upper snake case. Suggestion: BEST_FRIEND_OF",
        ))
        .stderr(contains("3 error(s), 0 warning(s), 0 info(s)"))
        .stdout(contains("no pedantic issues").not());
}

#[test]
fn json_manifest_and_explicit_path() {
    let dir = tempdir();
    let manifest = write_file(
        dir.path(),
        "project.json",
        r#"{"scopes": [{"name": "default", "pipelines": [{"name": "Load People"}]}]}"#,
    );

    lint_cmd(dir.path())
        .arg("check")
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(contains(
            "Pipeline Load People is not lower dash case. Suggestion: load-people",
        ));
}

#[test]
fn json_output_format() {
    let dir = tempdir();
    write_file(dir.path(), "pedantic-project.toml", BASIC_MANIFEST);

    let output = lint_cmd(dir.path())
        .args(["check", "--format", "json"])
        .output()
        .expect("run pedantic-lint");
    assert!(!output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["messages"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["messages"][0]["kind"], "failure");
    assert_eq!(json["report"]["failed_node_types"][0], "person");
    assert_eq!(json["report"]["violations"][0]["rule"], "node-camel-case");
}

#[test]
fn rule_filter_runs_single_rule() {
    let dir = tempdir();
    write_file(dir.path(), "pedantic-project.toml", BASIC_MANIFEST);

    lint_cmd(dir.path())
        .args(["check", "--rule", "property-snake-case"])
        .assert()
        .failure()
        .stderr(contains("Property nameOfPerson"))
        .stderr(contains("Node type person").not());
}

#[test]
fn unknown_rule_fails() {
    let dir = tempdir();
    write_file(dir.path(), "pedantic-project.toml", CLEAN_MANIFEST);

    lint_cmd(dir.path())
        .args(["check", "--rule", "no-such-rule"])
        .assert()
        .failure()
        .stderr(contains("Unknown rule: no-such-rule"));
}

#[test]
fn missing_manifest_fails() {
    let dir = tempdir();

    lint_cmd(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn warning_severity_keeps_exit_success() {
    let dir = tempdir();
    write_file(dir.path(), "pedantic-project.toml", BASIC_MANIFEST);
    write_file(
        dir.path(),
        "pedantic.toml",
        r#"
[rules.property-snake-case]
severity = "warning"

[rules.node-camel-case]
severity = "warning"

[rules.relationship-upper-snake-case]
allow = ["best_*"]
"#,
    );

    lint_cmd(dir.path())
        .arg("check")
        .assert()
        .success()
        .stderr(contains("warning: Property nameOfPerson"))
        .stderr(contains("best_friend_of").not())
        .stdout(contains("no pedantic issues").not());
}

#[test]
fn invalid_config_fails() {
    let dir = tempdir();
    write_file(dir.path(), "pedantic-project.toml", CLEAN_MANIFEST);
    write_file(dir.path(), "pedantic.toml", "[rules.node-singular]\nseverity = \"fatal\"\n");

    lint_cmd(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("Failed to parse config"));
}

#[test]
fn debug_flag_enables_logging() {
    let dir = tempdir();
    write_file(dir.path(), "pedantic-project.toml", CLEAN_MANIFEST);

    lint_cmd(dir.path())
        .args(["-d", "check"])
        .assert()
        .success()
        .stderr(contains("Starting analysis"));
}

// ─── list-rules / init ─────────────────────────────────────────────

#[test]
fn list_rules_names_every_rule() {
    let dir = tempdir();

    lint_cmd(dir.path())
        .arg("list-rules")
        .assert()
        .success()
        .stderr(contains("property-snake-case"))
        .stderr(contains("node-camel-case"))
        .stderr(contains("node-singular"))
        .stderr(contains("relationship-upper-snake-case"))
        .stderr(contains("pipeline-lower-dash-case"));
}

#[test]
fn init_writes_default_config_once() {
    let dir = tempdir();

    lint_cmd(dir.path())
        .arg("init")
        .assert()
        .success()
        .stderr(contains("Created pedantic.toml"));

    let written = std::fs::read_to_string(dir.path().join("pedantic.toml")).expect("read config");
    assert!(written.contains("[rules.node-singular]"));

    lint_cmd(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("already exists"));
}
