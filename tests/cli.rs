//! End-to-end tests for the splitledger binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("splitledger").unwrap();
    cmd.env("SPLITLEDGER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn create_trip(dir: &TempDir) {
    ledger(dir)
        .args(["group", "add", "Trip", "-m", "Alice", "-m", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created group: Trip"));
}

#[test]
fn test_group_add_and_list() {
    let dir = TempDir::new().unwrap();
    create_trip(&dir);

    ledger(&dir)
        .args(["group", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip"))
        .stdout(predicate::str::contains("$0.00"));

    assert!(dir.path().join("data").join("groups.json").exists());
}

#[test]
fn test_group_needs_two_members() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["group", "add", "Solo", "-m", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Add at least 2 members to create a group",
        ));

    ledger(&dir)
        .args(["group", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No groups yet."));
}

#[test]
fn test_expense_and_balance() {
    let dir = TempDir::new().unwrap();
    create_trip(&dir);

    ledger(&dir)
        .args(["expense", "add", "Trip", "Dinner", "40", "--paid-by", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: Dinner $40.00"))
        .stdout(predicate::str::contains("$20.00"));

    ledger(&dir)
        .args(["balance", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spend: $40.00"))
        .stdout(predicate::str::contains("-$20.00"));

    ledger(&dir)
        .args(["activity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinner"))
        .stdout(predicate::str::contains("Trip"));

    ledger(&dir)
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food & Drinks"));
}

#[test]
fn test_expense_rejects_outsider_payer() {
    let dir = TempDir::new().unwrap();
    create_trip(&dir);

    ledger(&dir)
        .args(["expense", "add", "Trip", "Taxi", "12", "--paid-by", "Carol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a member"));
}

#[test]
fn test_balance_unknown_group() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["balance", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Group not found: Nowhere"));
}

#[test]
fn test_summary_when_empty() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn test_export_csv_to_file() {
    let dir = TempDir::new().unwrap();
    create_trip(&dir);
    ledger(&dir)
        .args(["expense", "add", "Trip", "Dinner", "40", "-p", "Alice"])
        .assert()
        .success();

    let out = dir.path().join("expenses.csv");
    ledger(&dir)
        .args(["export", "csv", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(out).unwrap();
    assert!(csv.starts_with("ID,Created,Group,Title"));
    assert!(csv.contains("Alice=20.00;Bob=20.00"));
}

#[test]
fn test_export_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    create_trip(&dir);

    ledger(&dir)
        .args(["export", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""))
        .stdout(predicate::str::contains("\"Trip\""));
}

#[test]
fn test_corrupt_expenses_blocks_writes() {
    let dir = TempDir::new().unwrap();
    create_trip(&dir);

    let data = dir.path().join("data");
    let groups_before = std::fs::read_to_string(data.join("groups.json")).unwrap();
    std::fs::write(data.join("expenses.json"), "{corrupt").unwrap();

    ledger(&dir)
        .args(["group", "add", "Flat", "-m", "Cleo", "-m", "Dan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stored data could not be loaded"));

    ledger(&dir)
        .args(["expense", "add", "Trip", "Taxi", "12", "-p", "Bob"])
        .assert()
        .failure();

    let groups_after = std::fs::read_to_string(data.join("groups.json")).unwrap();
    assert_eq!(groups_after, groups_before);
    assert!(groups_after.contains("\"Trip\""));
    assert_eq!(
        std::fs::read_to_string(data.join("expenses.json")).unwrap(),
        "{corrupt"
    );

    // Read-only commands still run, on an empty ledger
    ledger(&dir)
        .args(["group", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No groups yet."));
}

#[test]
fn test_invalid_date_format_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format":"%Q"}"#).unwrap();

    ledger(&dir)
        .args(["group", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid date_format '%Q'"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_first_run_writes_settings() {
    let dir = TempDir::new().unwrap();

    ledger(&dir).arg("config").assert().success();

    let settings = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(settings.contains("\"currency_symbol\""));
}

#[test]
fn test_export_summary_only_for_csv() {
    let dir = TempDir::new().unwrap();
    create_trip(&dir);
    ledger(&dir)
        .args(["expense", "add", "Trip", "Dinner", "40", "-p", "Alice"])
        .assert()
        .success();

    ledger(&dir)
        .args(["export", "json", "--summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only available for CSV"));

    ledger(&dir)
        .args(["export", "csv", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category,Food & Drinks,40.00,1,100.00"))
        .stdout(predicate::str::contains("Group,Trip,40.00,1,100.00"));
}

#[test]
fn test_audit_lists_creations() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries yet."));

    create_trip(&dir);
    ledger(&dir)
        .args(["expense", "add", "Trip", "Dinner", "40", "-p", "Alice"])
        .assert()
        .success();

    ledger(&dir)
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created expense \"Dinner\""))
        .stdout(predicate::str::contains("created group").not());
}
