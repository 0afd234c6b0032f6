//! End-to-end menu sessions
//!
//! Drives the spendlog binary through scripted stdin sessions and asserts on
//! the printed output. Each session runs in its own temp directory so the
//! fixed `expenses.txt` ledger file never leaks between tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn add_and_view_expense() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin("1\n12.50\nFood\n2025-03-01\nlunch\n4\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Expense added successfully! Current expense count: 1",
        ))
        .stdout(predicate::str::contains("Current Expenses (Total: 1):"))
        .stdout(predicate::str::contains("lunch"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn purely_numeric_description_is_reprompted() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin("1\n10\nFood\n2025-03-01\n123\nlunch\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input! Description must contain letters and cannot be purely numeric.",
        ))
        .stdout(predicate::str::contains(
            "Expense added successfully! Current expense count: 1",
        ));
}

#[test]
fn exactly_meeting_budget_is_rejected() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin(
            "5\nFood\n100\n\
             1\n60\nFood\n2025-03-01\ngroceries\n\
             1\n40\nFood\n2025-03-02\ndinner\n\
             4\n9\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set for Food: 100"))
        .stdout(predicate::str::contains(
            "Cannot add expense! total spending (100) would exactly meet budget (100)",
        ))
        .stdout(predicate::str::contains("Current Expenses (Total: 1):"));
}

#[test]
fn exceeding_budget_is_rejected() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin(
            "5\nFood\n100\n\
             1\n60\nFood\n2025-03-01\ngroceries\n\
             1\n50\nFood\n2025-03-02\ndinner\n\
             9\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "total spending (110) would exceed budget (100)",
        ));
}

#[test]
fn approaching_budget_triggers_alert() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin(
            "5\nFood\n100\n\
             1\n60\nFood\n2025-03-01\ngroceries\n\
             1\n39.99\nFood\n2025-03-02\ndinner\n\
             9\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Alert: Approaching budget limit for Food!",
        ));
}

#[test]
fn delete_with_zero_cancels() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin("1\n12.5\nFood\n2025-03-01\nlunch\n3\n0\n4\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled."))
        .stdout(predicate::str::contains("Current Expenses (Total: 1):"));
}

#[test]
fn delete_out_of_range_reports_invalid_index() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin("1\n12.5\nFood\n2025-03-01\nlunch\n3\n2\n4\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no expense at index 2"))
        .stdout(predicate::str::contains("Current Expenses (Total: 1):"));
}

#[test]
fn edit_keeps_fields_on_empty_input() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin(
            "1\n12.5\nFood\n2025-03-01\nlunch\n\
             2\n1\n20\n\n\n\n\
             4\n9\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense updated successfully!"))
        .stdout(predicate::str::contains("20.00"))
        .stdout(predicate::str::contains("lunch"));
}

#[test]
fn summarize_groups_by_exact_case() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin(
            "1\n10\nFood\n2025-03-01\nlunch\n\
             1\n5\nfood\n2025-03-01\nsnack\n\
             6\n9\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Summary by Category:"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("food"));
}

#[test]
fn save_then_load_in_fresh_session() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .write_stdin("1\n12.5\nFood\n2025-03-01\nlunch\n7\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses saved to file."));

    assert!(dir.path().join("expenses.txt").exists());

    spendlog(&dir)
        .write_stdin("8\n4\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses loaded from file."))
        .stdout(predicate::str::contains("Current Expenses (Total: 1):"))
        .stdout(predicate::str::contains("lunch"));
}

#[test]
fn load_without_saved_file_reports_not_found() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin("8\n4\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved expenses found."))
        .stdout(predicate::str::contains(
            "No expenses recorded. Add expenses using option 1.",
        ));
}

#[test]
fn unknown_choice_reprompts() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .write_stdin("42\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Try again."));
}
