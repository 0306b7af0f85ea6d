use std::io::Write;
use std::path::{Path, PathBuf};

use ad9361_config::keys::{Field, KEY_TABLE};
use ad9361_config::numeric::Base;
use ad9361_config::{tokenizer, ConfigError, ConfigRecord};
use tempfile::NamedTempFile;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn assert_only_field_set(record: &ConfigRecord, target: Field, expected: i64) {
    for field in Field::ALL {
        let value = record.get(*field);
        if *field == target {
            assert_eq!(value, expected, "{} should be {}", field, expected);
        } else {
            assert_eq!(value, 0, "{} changed while setting {}", field, target);
        }
    }
    assert_eq!(record.tx_path_clock_frequencies, [0; 6]);
    assert_eq!(record.rx_path_clock_frequencies, [0; 6]);
    assert_eq!(record.rf_tx_bandwidth_hz, 0);
    assert_eq!(record.rf_rx_bandwidth_hz, 0);
}

#[test]
fn test_every_key_sets_only_its_field() {
    for entry in KEY_TABLE {
        let file = write_config(&format!("{}: 17\n", entry.key));
        let mut record = ConfigRecord::default();
        let summary = tokenizer::ingest_file(file.path(), &mut record).unwrap();

        let expected = match entry.base {
            Base::Hex => 0x17,
            _ => 17,
        };
        assert_eq!(summary.assigned, 1);
        assert_only_field_set(&record, entry.field, expected);
    }
}

#[test]
fn test_hex_fields_parse_ff() {
    for entry in KEY_TABLE.iter().filter(|e| e.base == Base::Hex) {
        let mut record = ConfigRecord::default();
        tokenizer::ingest_str(&format!("{}: ff\n", entry.key), &mut record).unwrap();

        let expected = if entry.width.is_signed() { -1 } else { 255 };
        assert_only_field_set(&record, entry.field, expected);
    }
}

#[test]
fn test_narrowing_through_the_stream() {
    let mut record = ConfigRecord::default();
    tokenizer::ingest_str("id_no: 300\ngc_rx1_mode: -1\n", &mut record).unwrap();
    assert_eq!(record.id_no, 44);
    assert_eq!(record.gc_rx1_mode, 255);
}

#[test]
fn test_unrecognised_key_leaves_defaults() {
    let file = write_config("definitely_not_a_key: 12345\n");
    let mut record = ConfigRecord::default();
    let summary = tokenizer::ingest_file(file.path(), &mut record).unwrap();

    assert_eq!(record, ConfigRecord::default());
    assert_eq!(summary.assigned, 0);
    assert_eq!(summary.unknown_keys, vec!["definitely_not_a_key".to_string()]);
}

#[test]
fn test_malformed_value_is_zero_and_parse_continues() {
    let mut record = ConfigRecord::default();
    record.reference_clk_rate = 1;
    tokenizer::ingest_str("reference_clk_rate: abc\nrssi_wait: 5\n", &mut record).unwrap();

    assert_eq!(record.reference_clk_rate, 0);
    assert_eq!(record.rssi_wait, 5);
}

#[test]
fn test_missing_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut record = ConfigRecord::default();
    let err = tokenizer::ingest_file(dir.path().join("config.yaml"), &mut record).unwrap_err();

    assert!(matches!(err, ConfigError::Open { .. }));
    assert_eq!(record, ConfigRecord::default());
}

#[test]
fn test_invalid_utf8_is_tokenizer_init_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"id_no: \xff\xfe\n").unwrap();
    file.flush().unwrap();

    let mut record = ConfigRecord::default();
    let err = tokenizer::ingest_file(file.path(), &mut record).unwrap_err();

    assert!(matches!(err, ConfigError::TokenizerInit { .. }));
    assert_eq!(record, ConfigRecord::default());
}

#[test]
fn test_fixture_config() {
    let mut record = ConfigRecord::default();
    let summary = tokenizer::ingest_file(fixture("config.yaml"), &mut record).unwrap();

    assert_eq!(record.reference_clk_rate, 40_000_000);
    assert_eq!(record.two_rx_two_tx_mode_enable, 1);
    assert_eq!(record.rx_synthesizer_frequency_hz, 2_400_000_000);
    assert_eq!(record.tx_attenuation_mdb, 10_000);
    assert_eq!(record.dcxo_coarse_and_fine_tune, [8, 5920]);
    assert_eq!(record.gc_dec_pow_measurement_duration, 8192);
    assert_eq!(record.dc_offset_count_high_range, 0x28);
    assert_eq!(record.dc_offset_count_low_range, 0x32);
    assert_eq!(record.temp_sense_offset_signed, 0xCEu8 as i8);
    assert_eq!(record.ctrl_outs_enable_mask, 0xFF);
    assert_eq!(record.lvds_bias_mv, 150);
    assert_eq!(record.gpio_resetb, 54);
    assert_eq!(record.gpio_sync, -1);

    assert_eq!(
        summary.unknown_keys,
        vec!["aux_dac3_default_value_mV".to_string(), "mcs_sync_mode".to_string()]
    );
}
