use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn bridge_exchange() -> Command {
    let mut cmd = Command::cargo_bin("bridge-exchange").expect("binary built");
    cmd.env("RUST_LOG", "off");
    cmd
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn convert_prints_fixed_digits() {
    bridge_exchange()
        .args(["convert", "1", "BTC", "USDT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("43000.00000000 USDT"));
}

#[test]
fn convert_json_output() {
    bridge_exchange()
        .args(["--json", "convert", "100", "usdt", "eth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"conversion\""))
        .stdout(predicate::str::contains("0.04000000"));
}

#[test]
fn convert_unknown_pair_fails() {
    bridge_exchange()
        .args(["convert", "1", "BTC", "BTC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Conversion from BTC to BTC is not available",
        ));
}

#[test]
fn percent_uses_configured_balance() {
    bridge_exchange()
        .args(["percent", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("250.00"));
}

#[test]
fn order_composes_limit_text() {
    bridge_exchange()
        .args(["order", "--side", "sell", "--amount", "0.5", "--price", "45000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Place sell order: 0.5 BTC at 45000 USDT?",
        ));
}

#[test]
fn order_without_amount_fails() {
    bridge_exchange()
        .args(["order"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter amount"));
}

#[test]
fn config_validate_reports_bad_file() {
    let file = temp_file("[trading]\nbase = \"BTC\"\nquote = \"BTC\"\n");
    bridge_exchange()
        .args(["config", "validate", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("quote"));
}

#[test]
fn config_validate_accepts_defaults() {
    bridge_exchange()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration valid"))
        .stdout(predicate::str::contains("Session"))
        .stdout(predicate::str::contains("BTC/USDT"));
}

#[test]
fn scripted_session_places_order() {
    let script = temp_file(
        "# buy half the balance at a limit\n\
         trade\n\
         slider 50\n\
         price 43000\n\
         place\n\
         quit\n",
    );

    bridge_exchange()
        .args(["run", "--yes", "--script"])
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Place buy order: 500.00 BTC at 43000 USDT?",
        ))
        .stdout(predicate::str::contains("Order placed successfully!"));
}

#[test]
fn scripted_session_warns_on_unknown_command() {
    let script = temp_file("dance\nshow\n");

    bridge_exchange()
        .args(["run", "--script"])
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command 'dance'"));
}

#[test]
fn config_init_writes_loadable_template() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bridge.toml");

    bridge_exchange()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success();
    bridge_exchange()
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    bridge_exchange()
        .args(["convert", "1", "ETH", "USDT", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2800.00000000 USDT"));
}

#[test]
fn percent_rejects_negative_balance() {
    bridge_exchange()
        .args(["percent", "50", "--balance=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid amount"));
}

#[test]
fn oversized_inputs_fail_cleanly() {
    bridge_exchange()
        .args(["percent", "100", "--balance", "79228162514264337593543950335"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid amount"))
        .stderr(predicate::str::contains("panicked").not());

    bridge_exchange()
        .args(["convert", "79228162514264337593543950335", "BTC", "USDT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid amount"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn json_session_emits_only_json_lines() {
    let script = temp_file("trade\namount 0.1\nplace\npay\n");

    let output = bridge_exchange()
        .args(["--json", "run", "--yes", "--script"])
        .arg(script.path())
        .output()
        .expect("run bridge-exchange");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        let value: serde_json::Value =
            serde_json::from_str(line).unwrap_or_else(|e| panic!("not JSON: {line}: {e}"));
        assert!(value.get("type").is_some(), "missing type: {line}");
    }
    assert!(stdout.contains("\"type\":\"confirm\""));
    assert!(stdout.contains("Place buy market order: 0.1 BTC?"));
    assert!(stdout.contains("\"type\":\"alert\""));
    assert!(stdout.contains("Order placed successfully!"));
}
