use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ad9361-config"))
}

#[test]
fn test_json_dump() {
    let output = cli()
        .arg("--config")
        .arg(fixture("config.yaml"))
        .arg("--fir")
        .arg(fixture("ad9361_fir.conf"))
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let dump: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dump["record"]["reference_clk_rate"], 40_000_000);
    assert_eq!(dump["record"]["rf_tx_bandwidth_hz"], 18_000_000);
    assert_eq!(dump["filters"]["tx"]["coef_size"], 128);
    assert_eq!(dump["unknown_keys"][0], "aux_dac3_default_value_mV");
}

#[test]
fn test_no_fir_skips_filter() {
    let output = cli()
        .arg("--config")
        .arg(fixture("config.yaml"))
        .arg("--no-fir")
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let dump: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(dump.get("filters").is_none());
    assert_eq!(dump["record"]["rf_tx_bandwidth_hz"], 0);
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli()
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .arg("--no-fir")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}

#[test]
fn test_rust_log_enables_debug_without_verbose_flag() {
    let output = cli()
        .env("RUST_LOG", "debug")
        .arg("--config")
        .arg(fixture("config.yaml"))
        .arg("--no-fir")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading configuration"), "{stderr}");
    assert!(stderr.contains("skipping unrecognised key"), "{stderr}");
}

#[test]
fn test_default_level_is_quiet() {
    let output = cli()
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(fixture("config.yaml"))
        .arg("--no-fir")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("reading configuration"));
}

#[test]
fn test_verbose_flag_raises_level_over_rust_log() {
    let output = cli()
        .env("RUST_LOG", "error")
        .arg("-v")
        .arg("--config")
        .arg(fixture("config.yaml"))
        .arg("--no-fir")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("reading configuration"));
}
