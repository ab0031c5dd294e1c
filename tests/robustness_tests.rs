use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_malformed_csv_handling() {
    let script = common::write_script(&[
        "deposit, 1.0",
        // Unknown operation type
        "transfer, 1.0",
        // Text in amount field
        "deposit, not_a_number",
        "deposit, 2.0",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("wallet"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading operation"))
        .stdout(predicate::str::contains("final balance: 3\n"));
}

#[test]
fn test_missing_amount_is_reported() {
    let script = common::write_script(&["deposit, 5.0", "withdraw,", "balance,"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("wallet"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("withdraw missing amount"))
        .stdout(predicate::str::contains("balance: 5\n"))
        .stdout(predicate::str::contains("final balance: 5\n"));
}

#[test]
fn test_rejections_do_not_stop_replay() {
    let script = common::write_script(&[
        "withdraw, 1.0",
        "deposit, -3.0",
        "deposit, 4.0",
        "withdraw, 1.5",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("wallet"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error processing operation"))
        .stdout(predicate::str::contains("final balance: 2.5\n"));
}

#[test]
fn test_non_finite_amounts_are_rejected() {
    let script = common::write_script(&[
        "deposit, NaN",
        "deposit, inf",
        "deposit, 5",
        "withdraw, 1",
        "balance,",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("wallet"));
    cmd.arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("deposit amount NaN is not a finite number"))
        .stderr(predicate::str::contains("deposit amount inf is not a finite number"))
        .stdout(predicate::str::contains("balance: 4\n"))
        .stdout(predicate::str::contains("final balance: 4\n"));
}

#[test]
fn test_non_finite_initial_balance_fails() {
    let script = common::write_script(&["deposit, 1"]).unwrap();

    let mut cmd = Command::new(cargo_bin!("wallet"));
    cmd.arg(script.path()).arg("--initial-balance").arg("NaN");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("final balance").not());
}
