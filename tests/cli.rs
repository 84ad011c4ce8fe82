use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary invocation isolated to a temp data dir and temp HOME, so tests
/// never touch the real settings or snapshot.
fn kurs(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kurs").unwrap();
    cmd.env("KURS_DATA_DIR", dir.path());
    cmd.env("HOME", dir.path());
    cmd
}

#[test]
fn convert_through_cross_rate() {
    let dir = TempDir::new().unwrap();
    kurs(&dir).args(["rates", "set", "USD", "1300"]).assert().success();
    kurs(&dir).args(["rates", "set", "EUR", "1400"]).assert().success();

    kurs(&dir)
        .args(["convert", "100", "--from", "USD", "--to", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("92.86 EUR"));
}

#[test]
fn identity_conversion_works_with_empty_table() {
    let dir = TempDir::new().unwrap();
    kurs(&dir)
        .args(["convert", "123.45", "--from", "USD", "--to", "USD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("123.45 USD"));
}

#[test]
fn missing_rate_is_an_error() {
    let dir = TempDir::new().unwrap();
    kurs(&dir)
        .args(["convert", "10", "--from", "USD", "--to", "GBP"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown currency"));
}

#[test]
fn non_numeric_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    kurs(&dir)
        .args(["convert", "lots", "--from", "USD", "--to", "KRW"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn budget_ledger_round_trip() {
    let dir = TempDir::new().unwrap();
    kurs(&dir).args(["rates", "set", "USD", "1300"]).assert().success();
    kurs(&dir).args(["budget", "set", "1000000"]).assert().success();
    kurs(&dir)
        .args(["budget", "add", "--amount", "100", "--currency", "usd", "--desc", "flights"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added row 1"));

    kurs(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("130,000.00"))
        .stdout(predicate::str::contains("870,000.00 KRW"));
}

#[test]
fn update_and_delete_rows() {
    let dir = TempDir::new().unwrap();
    kurs(&dir).args(["rates", "set", "USD", "1300"]).assert().success();
    kurs(&dir).args(["budget", "add", "--amount", "100", "--currency", "USD"]).assert().success();
    kurs(&dir).args(["budget", "add", "--amount", "200", "--currency", "USD"]).assert().success();

    kurs(&dir)
        .args(["budget", "update", "1", "--field", "amount", "--value", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated row 1"));

    kurs(&dir)
        .args(["budget", "update", "99", "--field", "amount", "--value", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No row with id 99"));

    kurs(&dir)
        .args(["budget", "delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted row 2"));

    // 50 USD at 1300 is all that remains
    kurs(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("65,000.00"));
}

#[test]
fn unparsable_row_amounts_count_zero() {
    let dir = TempDir::new().unwrap();
    kurs(&dir).args(["rates", "set", "USD", "1300"]).assert().success();
    kurs(&dir).args(["budget", "set", "500000"]).assert().success();
    kurs(&dir).args(["budget", "add", "--amount", "oops", "--currency", "USD"]).assert().success();

    kurs(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spent:    0.00 KRW"))
        .stdout(predicate::str::contains("500,000.00 KRW"));
}

#[test]
fn expense_tracker_decrements_balance() {
    let dir = TempDir::new().unwrap();
    kurs(&dir).args(["rates", "set", "USD", "1300"]).assert().success();
    kurs(&dir).args(["budget", "set", "1000000"]).assert().success();

    kurs(&dir)
        .args(["expense", "add", "100", "--currency", "USD", "--desc", "hotel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("870,000.00 KRW"));

    kurs(&dir)
        .args(["expense", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hotel"))
        .stdout(predicate::str::contains("Balance:       870,000.00 KRW"));
}

#[test]
fn malformed_snapshot_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("kurs.json"), "{definitely not json").unwrap();

    kurs(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget rows"));

    kurs(&dir).args(["status"]).assert().success();
}

#[test]
fn fetch_failure_keeps_previous_rates() {
    let dir = TempDir::new().unwrap();
    kurs(&dir).args(["rates", "set", "USD", "1300"]).assert().success();

    // Nothing listens on this port; the fetch fails fast.
    kurs(&dir)
        .args(["rates", "fetch", "--url", "http://127.0.0.1:1/rates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keeping previous rates"));

    kurs(&dir)
        .args(["rates", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD"));
}

#[test]
fn fetch_without_url_is_an_error() {
    let dir = TempDir::new().unwrap();
    kurs(&dir)
        .args(["rates", "fetch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No rate service configured"));
}

#[test]
fn init_creates_snapshot() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    kurs(&dir)
        .args(["init", "--data-dir", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base currency: KRW"));
    assert!(data.join("kurs.json").exists());
}
