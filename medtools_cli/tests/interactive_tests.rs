//! Interactive session tests: scripted stdin drives the page loop.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("medtools"))
}

#[test]
fn test_default_command_is_interactive() {
    cli()
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MEDICAL TOOLS"))
        .stdout(predicate::str::contains("Interactions this session: 1"));
}

#[test]
fn test_visit_both_calculators() {
    cli()
        .arg("interactive")
        .write_stdin("1\n80\n1.75\nh\n2\n80\nmale\n60\n2.0\nh\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("OVERWEIGHT"))
        .stdout(predicate::str::contains("Severe renal impairment (stage 4)"))
        .stdout(predicate::str::contains("Prepare for dialysis"))
        .stdout(predicate::str::contains("Interactions this session: 5"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    cli()
        .arg("interactive")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("All rights reserved"));
}
