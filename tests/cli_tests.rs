//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory
//! via the `SPENDLOG_DATA_DIR` override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_then_list_shows_expense() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args([
            "expense", "add", "45.99", "--category", "food", "--mode", "cash", "--date",
            "2024-01-05", "--description", "groceries",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));

    spendlog(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$45.99"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("groceries"));
}

#[test]
fn list_is_newest_first_by_default() {
    let dir = TempDir::new().unwrap();

    for (amount, date) in [("10", "2024-01-01"), ("20", "2024-01-03"), ("30", "2024-01-02")] {
        spendlog(&dir)
            .args([
                "expense", "add", amount, "--category", "food", "--mode", "cash", "--date", date,
            ])
            .assert()
            .success();
    }

    let output = spendlog(&dir)
        .args(["expense", "list"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let jan3 = stdout.find("2024-01-03").unwrap();
    let jan2 = stdout.find("2024-01-02").unwrap();
    let jan1 = stdout.find("2024-01-01").unwrap();
    assert!(jan3 < jan2 && jan2 < jan1);
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args([
            "expense", "add", "0", "--category", "food", "--mode", "cash", "--date",
            "2024-01-05",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Enter a valid amount greater than 0",
        ));

    spendlog(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn filter_by_category_and_date_range() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args([
            "expense", "add", "10", "--category", "food", "--mode", "cash", "--date",
            "2024-01-05", "--description", "lunch",
        ])
        .assert()
        .success();
    spendlog(&dir)
        .args([
            "expense", "add", "20", "--category", "travel", "--mode", "cash", "--date",
            "2024-02-10", "--description", "train",
        ])
        .assert()
        .success();

    spendlog(&dir)
        .args(["expense", "list", "--category", "travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("train"))
        .stdout(predicate::str::contains("lunch").not());

    // Inclusive bounds keep the boundary date itself
    spendlog(&dir)
        .args(["expense", "list", "--from", "2024-01-05", "--to", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lunch"))
        .stdout(predicate::str::contains("train").not());
}

#[test]
fn search_matches_description_case_insensitively() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args([
            "expense", "add", "10", "--category", "food", "--mode", "cash", "--date",
            "2024-01-05", "--description", "Weekly Groceries",
        ])
        .assert()
        .success();

    spendlog(&dir)
        .args(["expense", "list", "--search", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekly Groceries"));

    spendlog(&dir)
        .args(["expense", "list", "--search", "restaurant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn total_sums_one_date() {
    let dir = TempDir::new().unwrap();

    for amount in ["50", "30"] {
        spendlog(&dir)
            .args([
                "expense", "add", amount, "--category", "food", "--mode", "cash", "--date",
                "2024-01-10",
            ])
            .assert()
            .success();
    }
    spendlog(&dir)
        .args([
            "expense", "add", "99", "--category", "rent", "--mode", "cash", "--date",
            "2024-01-11",
        ])
        .assert()
        .success();

    spendlog(&dir)
        .args(["total", "2024-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$80.00"));
}

#[test]
fn report_excludes_credit_card_from_savings() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args([
            "income", "add", "500", "--source", "salary", "--date", "2024-03-01",
        ])
        .assert()
        .success();
    spendlog(&dir)
        .args([
            "expense", "add", "200", "--category", "shopping", "--mode", "credit-card",
            "--date", "2024-03-10",
        ])
        .assert()
        .success();

    spendlog(&dir)
        .args(["report", "show", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expense: $200.00"))
        .stdout(predicate::str::contains("Total Income:  $500.00"))
        .stdout(predicate::str::contains("Savings:       $500.00"));
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args([
            "expense", "add", "10", "--category", "food", "--mode", "cash", "--date",
            "2024-01-05",
        ])
        .assert()
        .success();

    // Without --yes nothing is deleted
    spendlog(&dir)
        .args(["expense", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    spendlog(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$10.00"));

    spendlog(&dir)
        .args(["expense", "clear", "--yes"])
        .assert()
        .success();
    spendlog(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn data_survives_between_invocations() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args([
            "income", "add", "1200.50", "--source", "freelance", "--date", "2024-02-15",
            "--note", "invoice 42",
        ])
        .assert()
        .success();

    spendlog(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1200.50"))
        .stdout(predicate::str::contains("invoice 42"));
}

#[test]
fn corrupt_store_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("expenses.json"), "not json at all").unwrap();

    spendlog(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}
