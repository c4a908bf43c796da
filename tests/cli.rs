use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budgetwise(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetwise").unwrap();
    cmd.env("BUDGETWISE_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_income_add_and_list() {
    let dir = TempDir::new().unwrap();

    budgetwise(&dir)
        .args(["income", "add", "Salary", "2,000.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income source: Salary"));

    budgetwise(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Total Monthly Income: 2000.00 €"));

    assert!(dir.path().join("data").join("app_incomeSources.json").exists());
}

#[test]
fn test_summary_gives_savings_advice() {
    let dir = TempDir::new().unwrap();

    budgetwise(&dir)
        .args(["income", "add", "Salary", "2000"])
        .assert()
        .success();
    for (name, amount, category) in [
        ("Dining Out", "200", "variable"),
        ("Hobbies", "150", "other"),
        ("Rent", "1000", "fixed"),
    ] {
        budgetwise(&dir)
            .args(["expense", "add", name, amount, "-c", category])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("Added expense: {}", name)));
    }

    budgetwise(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("surplus of 650.00€"))
        .stdout(predicate::str::contains("\"Dining Out\" by 20.00€"));
}

#[test]
fn test_empty_list_messages() {
    let dir = TempDir::new().unwrap();

    budgetwise(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No income sources added yet."));

    budgetwise(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No financial goals set."));
}

#[test]
fn test_unknown_goal_fails() {
    let dir = TempDir::new().unwrap();

    budgetwise(&dir)
        .args(["goal", "contribute", "Missing", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal not found: Missing"));
}

#[test]
fn test_invalid_amount_fails() {
    let dir = TempDir::new().unwrap();

    budgetwise(&dir)
        .args(["income", "add", "Salary", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    budgetwise(&dir)
        .args(["income", "add", "Salary", "2000"])
        .assert()
        .success();

    budgetwise(&dir)
        .arg("reset")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    budgetwise(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));

    budgetwise(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All stored data has been deleted."));

    budgetwise(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No income sources added yet."));
}

#[test]
fn test_investment_lifecycle() {
    let dir = TempDir::new().unwrap();

    budgetwise(&dir)
        .args(["income", "add", "Salary", "2000"])
        .assert()
        .success();

    budgetwise(&dir)
        .args([
            "investment", "add", "Fund", "100", "-s", "2024-01-01", "-c", "150", "--symbol",
            "FND", "-i", "Salary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added investment: Fund"))
        .stdout(predicate::str::contains("Current Value: 150.00 €"));

    budgetwise(&dir)
        .args(["investment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fund"))
        .stdout(predicate::str::contains("Portfolio Summary"))
        .stdout(predicate::str::contains("Total Current Value:"));

    budgetwise(&dir)
        .args(["investment", "show", "fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Investment: Fund"))
        .stdout(predicate::str::contains("Symbol:        FND"));

    budgetwise(&dir)
        .args(["investment", "set-value", "Fund", "175"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set current value of Fund to 175.00 €"));

    budgetwise(&dir)
        .args(["investment", "refresh", "Fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refreshed Fund:"));

    budgetwise(&dir)
        .args(["investment", "refresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refreshed 1 investment(s)"));

    budgetwise(&dir)
        .args(["investment", "edit", "Fund", "-n", "World Fund", "--unlink"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated investment: World Fund"));

    budgetwise(&dir)
        .args(["investment", "remove", "World Fund"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed investment: World Fund"));

    budgetwise(&dir)
        .args(["investment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No investments added yet."));
}

#[test]
fn test_investment_added_today_keeps_initial_value() {
    let dir = TempDir::new().unwrap();

    budgetwise(&dir)
        .args(["-v", "inv", "add", "Index", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added investment: Index"))
        .stdout(predicate::str::contains("Current Value: 250.00 €"));
}

#[test]
fn test_expense_and_goal_edit() {
    let dir = TempDir::new().unwrap();

    budgetwise(&dir)
        .args(["expense", "add", "Gym", "30"])
        .assert()
        .success();

    budgetwise(&dir)
        .args(["expense", "edit", "Gym", "-a", "35.50", "-n", "Fitness"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated expense: Fitness"));

    budgetwise(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fitness"))
        .stdout(predicate::str::contains("35.50 €"));

    budgetwise(&dir)
        .args(["goal", "add", "Car", "5000"])
        .assert()
        .success();

    budgetwise(&dir)
        .args(["goal", "edit", "Car", "-t", "6000", "-s", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated goal: Car"));

    budgetwise(&dir)
        .args(["goal", "show", "Car"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:     1500.00 €"))
        .stdout(predicate::str::contains("Target:    6000.00 €"));

    budgetwise(&dir)
        .args(["goal", "edit", "Missing", "-t", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal not found: Missing"));
}
