use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const ACCOUNTS: &str = r#"{
  "data": [
    {"id": 1, "name": "BBVA Nómina", "type": "LIQUID", "current_balance": "1500.00"},
    {"id": 2, "name": "Ahorro", "type": "LIQUID", "current_balance": 500},
    {"id": 3, "name": "Visa Oro", "type": "CREDIT", "current_balance": "-300.00"}
  ],
  "status": "success"
}"#;

const TRANSACTIONS: &str = r#"[
  {"id": 1, "account_id": 1, "amount": "2000.00", "type": "INCOME", "date": "2024-01-05", "description": "Nómina"},
  {"id": 2, "account_id": 1, "amount": "-450.50", "type": "EXPENSE", "date": "2024-01-10T09:30:00Z", "description": "Renta"},
  {"id": 3, "account_id": 3, "amount": "120.00", "type": "EXPENSE", "date": "2023-12-20", "description": "Super"},
  {"id": 4, "account_id": 2, "amount": "300.00", "type": "TRANSFER", "date": "2024-01-11", "description": "Traspaso"},
  {"id": 5, "account_id": 1, "amount": "1000.00", "type": "INCOME", "date": "2023-07-31", "description": "Bono"}
]"#;

fn finboard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("finboard").unwrap();
    cmd.env("FINBOARD_DATA_DIR", dir).env_remove("RUST_LOG");
    cmd
}

fn seeded_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("accounts.json"), ACCOUNTS).unwrap();
    std::fs::write(data.join("transactions.json"), TRANSACTIONS).unwrap();
    dir
}

#[test]
fn dashboard_shows_balances_and_month_flows() {
    let dir = seeded_dir();

    finboard(dir.path())
        .args(["dashboard", "--as-of", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard · 2024-01-15"))
        .stdout(predicate::str::contains("$1700.00"))
        .stdout(predicate::str::contains("-$300.00"))
        .stdout(predicate::str::contains("$2000.00"))
        .stdout(predicate::str::contains("$450.50"))
        .stdout(predicate::str::contains("$1549.50"))
        .stdout(predicate::str::contains("Ago 2023"))
        .stdout(predicate::str::contains("Ene 2024"))
        .stdout(predicate::str::contains("Data warnings").not());
}

#[test]
fn empty_data_dir_yields_zero_dashboard() {
    let dir = TempDir::new().unwrap();

    finboard(dir.path())
        .args(["dashboard", "--as-of", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No snapshot data yet"))
        .stdout(predicate::str::contains("$0.00"))
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn series_report_lists_requested_months() {
    let dir = seeded_dir();

    finboard(dir.path())
        .args(["report", "series", "--months", "3", "--as-of", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cash Flow (3 months)"))
        .stdout(predicate::str::contains("Nov 2023"))
        .stdout(predicate::str::contains("Ago 2023").not());
}

#[test]
fn export_json_to_stdout() {
    let dir = seeded_dir();

    let output = finboard(dir.path())
        .args(["export", "json", "--as-of", "2024-01-15"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["schema_version"], "1.0.0");
    assert_eq!(json["dashboard"]["total_balance"], "1700.00");
    assert_eq!(json["dashboard"]["liquidity"]["total_liquidity"], "2000.00");
    assert_eq!(json["dashboard"]["current_month"]["expense"], "450.50");
    assert_eq!(json["dashboard"]["cash_flow"]["rows"].as_array().unwrap().len(), 6);
    assert_eq!(json["dashboard"]["cash_flow"]["rows"][4]["expense"], "120.00");
}

#[test]
fn export_save_writes_into_export_dir() {
    let dir = seeded_dir();

    finboard(dir.path())
        .args(["export", "csv", "--save", "--as-of", "2024-01-15"])
        .assert()
        .success();

    let path = dir.path().join("exports").join("dashboard-2024-01-15.csv");
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.starts_with("Month,Label,Income,Expense,Net\n"));
    assert!(contents.contains("2024-01,Ene,2000.00,450.50,1549.50"));
}

#[test]
fn validate_strict_fails_on_orphaned_transaction() {
    let dir = seeded_dir();
    std::fs::write(
        dir.path().join("data").join("transactions.json"),
        r#"[{"id": 9, "account_id": 99, "amount": 10, "type": "EXPENSE", "date": "2024-01-02"}]"#,
    )
    .unwrap();

    finboard(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("transaction(s) for unknown accounts"));

    finboard(dir.path())
        .args(["validate", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("problem(s)"));
}

#[test]
fn malformed_records_are_reported_not_fatal() {
    let dir = seeded_dir();
    std::fs::write(
        dir.path().join("data").join("transactions.json"),
        r#"[
  {"id": 1, "account_id": 1, "amount": "2000.00", "type": "INCOME", "date": "2024-01-05"},
  {"id": 6, "account_id": 1, "amount": "80.00", "type": "EXPENSE", "date": null},
  {"id": 7, "account_id": 1, "amount": "abc", "type": "EXPENSE", "date": "2024-01-12"}
]"#,
    )
    .unwrap();

    finboard(dir.path())
        .args(["dashboard", "--as-of", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2000.00"))
        .stdout(predicate::str::contains("Data warnings (2)"))
        .stdout(predicate::str::contains("1 transaction(s) with unparseable date: txn-6"))
        .stdout(predicate::str::contains("1 transaction(s) with unreadable amount: txn-7"));

    let output = finboard(dir.path())
        .args(["export", "json", "--as-of", "2024-01-15"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dashboard = &json["dashboard"];
    assert_eq!(dashboard["validation"]["unparseable_dates"].as_array().unwrap().len(), 1);
    assert_eq!(dashboard["validation"]["invalid_amounts"].as_array().unwrap().len(), 1);
    assert_eq!(dashboard["current_month"]["income"], "2000.00");
    assert_eq!(dashboard["current_month"]["expense"], "0.00");
    assert_eq!(dashboard["current_month"]["issues"]["unparseable_dates"], 1);
    assert_eq!(dashboard["current_month"]["issues"]["invalid_amounts"], 1);
}

#[test]
fn accounts_lists_and_shows_details() {
    let dir = seeded_dir();

    finboard(dir.path())
        .arg("accounts")
        .assert()
        .success()
        .stdout(predicate::str::contains("BBVA Nómina"))
        .stdout(predicate::str::contains("Visa Oro"));

    finboard(dir.path())
        .args(["accounts", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn import_then_list_transactions() {
    let dir = TempDir::new().unwrap();
    let body = dir.path().join("body.json");
    std::fs::write(&body, TRANSACTIONS).unwrap();

    finboard(dir.path())
        .args(["import", "transactions"])
        .arg(&body)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 5 transactions"));

    finboard(dir.path())
        .args(["transactions", "--type", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renta"))
        .stdout(predicate::str::contains("Bono").not());
}

#[test]
fn rejects_malformed_reference_date() {
    let dir = seeded_dir();

    finboard(dir.path())
        .args(["dashboard", "--as-of", "15/01/2024"])
        .assert()
        .failure();
}
