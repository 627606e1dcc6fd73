//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the `PAYCYCLE_DATA_DIR` override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paycycle(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("paycycle").unwrap();
    cmd.env("PAYCYCLE_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_creates_store() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn budget_set_and_show() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args(["budget", "set", "--payday", "15", "--amount", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day 15 of each month"))
        .stdout(predicate::str::contains("$1500.00"));

    paycycle(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("day 15 of each month"));
}

#[test]
fn budget_set_requires_a_field() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args(["budget", "set"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to set"));
}

#[test]
fn expense_add_and_list() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args([
            "expense",
            "add",
            "12.50",
            "--category",
            "food",
            "--date",
            "2024-01-20",
            "--description",
            "lunch",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense exp-"));

    paycycle(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-20"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("lunch"))
        .stdout(predicate::str::contains("Total: $12.50 (1 expenses)"));
}

#[test]
fn expense_add_rejects_bad_category() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args(["expense", "add", "10", "--category", "groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn expense_add_rejects_zero_amount() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args(["expense", "add", "0", "--category", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn expense_list_filters_by_category() {
    let dir = TempDir::new().unwrap();

    for (amount, category) in [("10", "food"), ("20", "rent")] {
        paycycle(&dir)
            .args(["expense", "add", amount, "--category", category])
            .assert()
            .success();
    }

    paycycle(&dir)
        .args(["expense", "list", "--category", "rent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn expense_show_and_delete_by_short_id() {
    let dir = TempDir::new().unwrap();

    let output = paycycle(&dir)
        .args(["expense", "add", "33.00", "--category", "other"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    // "Added expense exp-xxxxxxxx: ..."
    let id = stdout
        .split_whitespace()
        .find(|w| w.starts_with("exp-"))
        .unwrap()
        .trim_end_matches(':')
        .to_string();

    paycycle(&dir)
        .args(["expense", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("$33.00"));

    // Without --force nothing is deleted
    paycycle(&dir)
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    paycycle(&dir)
        .args(["expense", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));

    paycycle(&dir)
        .args(["expense", "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn status_reports_cycle_position() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args(["budget", "set", "--payday", "15", "--amount", "1000"])
        .assert()
        .success();

    paycycle(&dir)
        .args([
            "expense", "add", "250", "--category", "rent", "--date", "2024-01-20",
        ])
        .assert()
        .success();

    paycycle(&dir)
        .args(["status", "--date", "2024-02-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Salary cycle: 2024-01-15 to 2024-02-15",
        ))
        .stdout(predicate::str::contains("$250.00"))
        .stdout(predicate::str::contains("$750.00"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args([
            "expense",
            "add",
            "5.25",
            "--category",
            "transport",
            "--date",
            "2024-03-01",
        ])
        .assert()
        .success();

    paycycle(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ID,Amount,Category,Date,Description",
        ))
        .stdout(predicate::str::contains("5.25,Transport,2024-03-01"));
}

#[test]
fn export_json_to_directory_uses_default_name() {
    let dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args(["expense", "add", "10", "--category", "food"])
        .assert()
        .success();

    paycycle(&dir)
        .args(["export", "json", "--output"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let exported: Vec<_> = std::fs::read_dir(out_dir.path()).unwrap().collect();
    assert_eq!(exported.len(), 1);
    let name = exported[0].as_ref().unwrap().file_name();
    let name = name.to_str().unwrap().to_string();
    assert!(name.starts_with("expenses_report_"));
    assert!(name.ends_with(".json"));
}

#[test]
fn report_summary_prints_totals() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args(["budget", "set", "--payday", "1", "--amount", "500"])
        .assert()
        .success();

    for (amount, category) in [("30", "food"), ("20", "food"), ("50", "utilities")] {
        paycycle(&dir)
            .args(["expense", "add", amount, "--category", category])
            .assert()
            .success();
    }

    paycycle(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Report"))
        .stdout(predicate::str::contains("Total expenses: 100.00"))
        .stdout(predicate::str::contains("  - Food: 50.00"))
        .stdout(predicate::str::contains("  - Utilities: 50.00"));
}

#[test]
fn history_lists_recorded_changes() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recorded changes yet"));

    paycycle(&dir)
        .args(["expense", "add", "10", "--category", "food"])
        .assert()
        .success();

    paycycle(&dir)
        .args(["budget", "set", "--payday", "15"])
        .assert()
        .success();

    paycycle(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense exp-"))
        .stdout(predicate::str::contains("UPDATE Settings settings"))
        .stdout(predicate::str::contains("Showing 2 of 2 recorded changes"));
}

#[test]
fn config_shows_store_counts() {
    let dir = TempDir::new().unwrap();

    paycycle(&dir)
        .args(["expense", "add", "10", "--category", "food"])
        .assert()
        .success();

    paycycle(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses:      1"))
        .stdout(predicate::str::contains("Audit entries: 1"));
}
