use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use ad9361_config::fir::{self, MAX_TAPS};
use ad9361_config::{tokenizer, ConfigError, ConfigRecord};
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn write_fir(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn with_coefficients(header: &str, pairs: usize) -> String {
    let mut text = header.to_string();
    for i in 0..pairs {
        writeln!(text, "{},{}", i as i32 - 20, 20 - i as i32).unwrap();
    }
    text
}

#[test]
fn test_forty_taps_round_up_to_64() {
    let file = write_fir(&with_coefficients(
        "RTX 1 2 3 4 5 6\nTX 1 GAIN -6 INT 2\nBWTX 18000000\n",
        40,
    ));
    let mut record = ConfigRecord::default();
    let filters = fir::ingest_fir_file(file.path(), &mut record).unwrap();

    assert_eq!(filters.tx.coef_size, 64);
    assert_eq!(filters.rx.coef_size, 64);
    assert_eq!((filters.tx.id, filters.tx.gain, filters.tx.rate), (1, -6, 2));
    assert_eq!(filters.tx.coef[0], -20);
    assert_eq!(filters.rx.coef[39], -19);
    assert!(filters.tx.coef[40..].iter().all(|c| *c == 0));

    assert_eq!(record.tx_path_clock_frequencies, [1, 2, 3, 4, 5, 6]);
    assert_eq!(record.rf_tx_bandwidth_hz, 18_000_000);
    assert_eq!(record.rx_path_clock_frequencies, [0; 6]);
    assert_eq!(record.rf_rx_bandwidth_hz, 0);
}

#[test]
fn test_bucket_edges() {
    let filters = fir::parse_fir_str(&with_coefficients("", 64)).unwrap();
    assert_eq!(filters.tx.coef_size, 64);

    let filters = fir::parse_fir_str(&with_coefficients("", 65)).unwrap();
    assert_eq!(filters.tx.coef_size, 128);
    assert_eq!(filters.rx.coef_size, 128);
}

#[test]
fn test_130_taps_rejected_and_record_untouched() {
    let file = write_fir(&with_coefficients("RTX 1 2 3 4 5 6\nBWTX 18000000\n", 130));
    let mut record = ConfigRecord::default();
    let err = fir::ingest_fir_file(file.path(), &mut record).unwrap_err();

    assert!(matches!(err, ConfigError::UnsupportedFilterLength { taps: 130, .. }));
    assert_eq!(record, ConfigRecord::default());
}

#[test]
fn test_prefix_disambiguation() {
    let filters = fir::parse_fir_str("RTX 1 2 3 4 5 6\nBWTX 1000\nRRX 6 5 4 3 2 1\nBWRX 2000\n").unwrap();

    // Neither RTX nor BWTX may be read as a TX header.
    assert_eq!(filters.tx.id, 0);
    assert_eq!(filters.tx.gain, 0);
    assert_eq!(filters.tx.rate, 0);
    assert_eq!(filters.tx.path_clks, [1, 2, 3, 4, 5, 6]);
    assert_eq!(filters.tx.bandwidth, 1000);

    assert_eq!(filters.rx.id, 0);
    assert_eq!(filters.rx.path_clks, [6, 5, 4, 3, 2, 1]);
    assert_eq!(filters.rx.bandwidth, 2000);
}

#[test]
fn test_missing_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut record = ConfigRecord::default();
    let err = fir::ingest_fir_file(dir.path().join("ad9361_fir.conf"), &mut record).unwrap_err();
    assert!(matches!(err, ConfigError::Open { .. }));
}

#[test]
fn test_fixture_filter_and_config_together() {
    let mut record = ConfigRecord::default();
    tokenizer::ingest_file(fixture("config.yaml"), &mut record).unwrap();
    let filters = fir::ingest_fir_file(fixture("ad9361_fir.conf"), &mut record).unwrap();

    assert_eq!(filters.tx.coef_size as usize, MAX_TAPS);
    assert_eq!(filters.tx.active_taps().len(), 128);
    assert_eq!(filters.tx.active_taps()[63], 14365);
    assert_eq!(filters.rx.rate, 4);
    assert_eq!(filters.tx.rate, 4);
    assert_eq!(record.rx_path_clock_frequencies[0], 983_040_000);
    assert_eq!(record.tx_path_clock_frequencies[5], 30_720_000);
    assert_eq!(record.rf_rx_bandwidth_hz, 18_000_000);

    // The main file's values survive the FIR pass.
    assert_eq!(record.reference_clk_rate, 40_000_000);
}
