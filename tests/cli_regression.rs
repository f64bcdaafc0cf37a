// Regression tests: the demo runner must grade the reference subjects clean
// and keep its machine-readable surface stable.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn runner_passes_the_reference_subjects() {
    let mut cmd = Command::cargo_bin("harness_runner").unwrap();
    cmd.arg("--no-color");
    cmd.assert().success().stdout(
        contains("PASS: The `Bird` class has been implemented.")
            .and(contains("Conformance summary"))
            .and(contains("failed 0")),
    );
}

#[test]
fn runner_emits_json_outcomes() {
    let mut cmd = Command::cargo_bin("harness_runner").unwrap();
    cmd.arg("--json");
    let assert = cmd.assert().success();
    let output = assert.get_output();

    let outcomes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = outcomes.as_array().expect("JSON report should be a list");
    assert!(!list.is_empty());
    assert!(list
        .iter()
        .all(|o| o.get("kind").is_some() && o.get("message").is_some()));
}

#[test]
fn runner_base_flag_covers_the_animal_contract() {
    let mut cmd = Command::cargo_bin("harness_runner").unwrap();
    cmd.args(["--base", "--no-color"]);
    cmd.assert().success().stdout(
        contains("The `Animal` class is defined.")
            .and(contains("The `getX()` method exists.")),
    );
}
