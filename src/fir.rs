//! FIR filter file parsing.
//!
//! The filter file is line oriented. Each line is classified by the
//! directive at its start, checked in this order:
//!
//! | Prefix   | Shape                                   | Target                   |
//! |----------|-----------------------------------------|--------------------------|
//! | `RTX`    | `RTX c0 c1 c2 c3 c4 c5`                 | transmit path clocks     |
//! | `RRX`    | `RRX c0 c1 c2 c3 c4 c5`                 | receive path clocks      |
//! | `BWTX `  | `BWTX hz`                               | transmit bandwidth       |
//! | `BWRX `  | `BWRX hz`                               | receive bandwidth        |
//! | `TX`     | `TX id GAIN gain INT interp`            | transmit id/gain/rate    |
//! | `RX`     | `RX id GAIN gain DEC decim`             | receive id/gain/rate     |
//! | (comma)  | `tx_coef,rx_coef`                       | next coefficient pair    |
//!
//! `RTX`/`RRX` and the bandwidth directives are checked before `TX`/`RX`
//! so that a path-clock or bandwidth line is never read as a filter header.
//! The bandwidth prefixes include the trailing space. Lines of any other
//! shape are ignored.
//!
//! Fields within a line are scanned left to right; scanning stops at the
//! first field that does not match and the fields before it keep their
//! values.
//!
//! Once all lines are read, the coefficient count is rounded up into one of
//! the two supported tap-count buckets (64 or 128) and both filters get
//! that size. Slots between the raw count and the bucket boundary stay zero.
//! The path clocks and bandwidths are then copied into the
//! [`ConfigRecord`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{ConfigError, Result};
use crate::numeric;
use crate::record::{ConfigRecord, PATH_CLOCK_COUNT};

/// Capacity of each coefficient table.
pub const MAX_TAPS: usize = 128;

/// Supported filter lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapBucket {
    /// Up to 64 coefficient pairs.
    Taps64,
    /// 65 to 128 coefficient pairs.
    Taps128,
}

impl TapBucket {
    /// Rounds a raw coefficient count up into a bucket.
    pub fn classify(count: usize) -> Result<Self> {
        match count {
            0..=64 => Ok(TapBucket::Taps64),
            65..=MAX_TAPS => Ok(TapBucket::Taps128),
            _ => Err(ConfigError::UnsupportedFilterLength {
                taps: count,
                max: MAX_TAPS,
            }),
        }
    }

    /// Number of taps in this bucket.
    pub fn taps(self) -> usize {
        match self {
            TapBucket::Taps64 => 64,
            TapBucket::Taps128 => 128,
        }
    }
}

/// One direction's filter descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirConfig {
    /// Channel selection from the `TX`/`RX` header line.
    pub id: u32,
    /// Filter gain in dB.
    pub gain: i32,
    /// Interpolation (transmit) or decimation (receive) factor.
    pub rate: u32,
    /// Path clock frequencies from the `RTX`/`RRX` line.
    pub path_clks: [u32; PATH_CLOCK_COUNT],
    /// RF bandwidth in Hz from the `BWTX`/`BWRX` line.
    pub bandwidth: u32,
    /// Always `MAX_TAPS` long; slots past the parsed prefix are zero.
    pub coef: Vec<i16>,
    /// Tap-count bucket (64 or 128), not the raw line count.
    pub coef_size: u8,
}

impl Default for FirConfig {
    fn default() -> Self {
        Self {
            id: 0,
            gain: 0,
            rate: 0,
            path_clks: [0; PATH_CLOCK_COUNT],
            bandwidth: 0,
            coef: vec![0; MAX_TAPS],
            coef_size: 0,
        }
    }
}

impl FirConfig {
    /// The coefficients the hardware will load (`coef_size` of them).
    pub fn active_taps(&self) -> &[i16] {
        &self.coef[..usize::from(self.coef_size).min(self.coef.len())]
    }
}

/// Transmit and receive filters parsed from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirFilters {
    /// First column of each coefficient line plus the `TX` directives.
    pub tx: FirConfig,
    /// Second column of each coefficient line plus the `RX` directives.
    pub rx: FirConfig,
}

impl FirFilters {
    /// Copies the path clocks and bandwidths into the main record.
    pub fn apply_to(&self, record: &mut ConfigRecord) {
        record.tx_path_clock_frequencies = self.tx.path_clks;
        record.rx_path_clock_frequencies = self.rx.path_clks;
        record.rf_tx_bandwidth_hz = self.tx.bandwidth;
        record.rf_rx_bandwidth_hz = self.rx.bandwidth;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    TxClocks,
    RxClocks,
    TxBandwidth,
    RxBandwidth,
    TxHeader,
    RxHeader,
    Coefficients,
    Ignored,
}

fn classify_line(line: &str) -> LineKind {
    if line.starts_with("RTX") {
        LineKind::TxClocks
    } else if line.starts_with("RRX") {
        LineKind::RxClocks
    } else if line.starts_with("BWTX ") {
        LineKind::TxBandwidth
    } else if line.starts_with("BWRX ") {
        LineKind::RxBandwidth
    } else if line.starts_with("TX") {
        LineKind::TxHeader
    } else if line.starts_with("RX") {
        LineKind::RxHeader
    } else if line.contains(',') {
        LineKind::Coefficients
    } else {
        LineKind::Ignored
    }
}

/// `sscanf`-style field reader over one line.
struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    /// Matches `lit` exactly at the current position.
    fn literal(&mut self, lit: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(lit)?;
        Some(())
    }

    /// Skips whitespace, then matches `word`.
    fn keyword(&mut self, word: &str) -> Option<()> {
        self.rest = self.rest.trim_start();
        self.literal(word)
    }

    fn unsigned(&mut self) -> Option<u32> {
        let (value, consumed) = numeric::scan_u32(self.rest)?;
        self.rest = &self.rest[consumed..];
        Some(value)
    }

    fn signed(&mut self) -> Option<i64> {
        let (value, consumed) = numeric::scan_auto(self.rest)?;
        self.rest = &self.rest[consumed..];
        Some(value)
    }
}

fn scan_header(line: &str, lead: &str, rate_word: &str, fir: &mut FirConfig) -> Option<()> {
    let mut fields = Fields::new(line);
    fields.literal(lead)?;
    fir.id = fields.unsigned()?;
    fields.keyword("GAIN")?;
    fir.gain = fields.signed()? as i32;
    fields.keyword(rate_word)?;
    fir.rate = fields.unsigned()?;
    Some(())
}

fn scan_path_clocks(line: &str, lead: &str, fir: &mut FirConfig) -> Option<()> {
    let mut fields = Fields::new(line);
    fields.literal(lead)?;
    for slot in fir.path_clks.iter_mut() {
        *slot = fields.unsigned()?;
    }
    Some(())
}

fn scan_bandwidth(line: &str, lead: &str, fir: &mut FirConfig) -> Option<()> {
    let mut fields = Fields::new(line);
    fields.literal(lead)?;
    fir.bandwidth = fields.unsigned()?;
    Some(())
}

fn scan_coefficients(line: &str, index: usize, tx: &mut FirConfig, rx: &mut FirConfig) -> Option<()> {
    let mut fields = Fields::new(line);
    tx.coef[index] = fields.signed()? as i16;
    fields.literal(",")?;
    rx.coef[index] = fields.signed()? as i16;
    Some(())
}

/// Line-by-line accumulator for a filter file.
///
/// Both coefficient tables start zero-filled and the running index at 0.
/// Call [`FirAccumulator::finish`] once every line has been pushed.
#[derive(Debug, Default)]
pub struct FirAccumulator {
    filters: FirFilters,
    count: usize,
}

impl FirAccumulator {
    /// Starts with zero-filled tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies and applies one line.
    pub fn push_line(&mut self, line: &str) {
        let line = line.trim_start();
        let kind = classify_line(line);
        trace!(?kind, line, "fir line");

        let FirFilters { tx, rx } = &mut self.filters;
        // Lines that fail to scan part-way keep whatever fields matched.
        let _ = match kind {
            LineKind::TxClocks => scan_path_clocks(line, "RTX", tx),
            LineKind::RxClocks => scan_path_clocks(line, "RRX", rx),
            LineKind::TxBandwidth => scan_bandwidth(line, "BWTX", tx),
            LineKind::RxBandwidth => scan_bandwidth(line, "BWRX", rx),
            LineKind::TxHeader => scan_header(line, "TX", "INT", tx),
            LineKind::RxHeader => scan_header(line, "RX", "DEC", rx),
            LineKind::Coefficients => {
                let index = self.count;
                self.count += 1;
                if index < MAX_TAPS {
                    scan_coefficients(line, index, tx, rx)
                } else {
                    None
                }
            }
            LineKind::Ignored => None,
        };
    }

    /// Number of coefficient lines seen so far, including any past
    /// `MAX_TAPS` that were not stored.
    pub fn coefficient_count(&self) -> usize {
        self.count
    }

    /// Classifies the tap count and sets both coefficient table sizes.
    pub fn finish(self) -> Result<FirFilters> {
        let bucket = TapBucket::classify(self.count).inspect_err(|err| {
            warn!(taps = self.count, %err, "rejecting filter");
        })?;

        let mut filters = self.filters;
        // Both buckets fit in the u8 size field.
        let size = bucket.taps() as u8;
        filters.tx.coef_size = size;
        filters.rx.coef_size = size;
        debug!(taps = self.count, bucket = bucket.taps(), "filter classified");
        Ok(filters)
    }
}

/// Parses a whole filter file held in memory. The record is not touched.
pub fn parse_fir_str(text: &str) -> Result<FirFilters> {
    let mut acc = FirAccumulator::new();
    for line in text.lines() {
        acc.push_line(line);
    }
    acc.finish()
}

/// Parses the filter file at `path` and back-fills `record`.
///
/// The file is closed as soon as the last line is read, before the tap
/// count is classified, so every exit path releases it. On error the record
/// is left untouched.
pub fn ingest_fir_file(path: impl AsRef<Path>, record: &mut ConfigRecord) -> Result<FirFilters> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading filter file");

    let acc = {
        let file = File::open(path).map_err(|source| {
            warn!(path = %path.display(), %source, "failed to open filter file");
            ConfigError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut acc = FirAccumulator::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            acc.push_line(&line);
        }
        acc
    };

    trace!(lines = acc.coefficient_count(), "filter file closed");
    let filters = acc.finish()?;
    filters.apply_to(record);
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coefficient_lines(n: usize) -> String {
        (0..n).map(|i| format!("{},{}\n", i, -(i as i64))).collect()
    }

    #[test]
    fn test_classification_order() {
        assert_eq!(classify_line("RTX 1 2 3 4 5 6"), LineKind::TxClocks);
        assert_eq!(classify_line("RRX 1 2 3 4 5 6"), LineKind::RxClocks);
        assert_eq!(classify_line("BWTX 1000"), LineKind::TxBandwidth);
        assert_eq!(classify_line("BWRX 1000"), LineKind::RxBandwidth);
        assert_eq!(classify_line("TX 3 GAIN 0 INT 2"), LineKind::TxHeader);
        assert_eq!(classify_line("RX 3 GAIN -6 DEC 2"), LineKind::RxHeader);
        assert_eq!(classify_line("-12,34"), LineKind::Coefficients);
        assert_eq!(classify_line("BWTX"), LineKind::Ignored);
        assert_eq!(classify_line(""), LineKind::Ignored);
    }

    #[test]
    fn test_rtx_is_not_a_tx_header() {
        let mut acc = FirAccumulator::new();
        acc.push_line("RTX 1 2 3 4 5 6");
        acc.push_line("BWTX 1000");
        let filters = acc.finish().unwrap();
        assert_eq!(filters.tx.path_clks, [1, 2, 3, 4, 5, 6]);
        assert_eq!(filters.tx.bandwidth, 1000);
        assert_eq!(filters.tx.id, 0);
        assert_eq!(filters.tx.rate, 0);
    }

    #[test]
    fn test_header_lines() {
        let filters = parse_fir_str("TX 3 GAIN -6 INT 2\nRX 3 GAIN 0x2 DEC 4\n").unwrap();
        assert_eq!((filters.tx.id, filters.tx.gain, filters.tx.rate), (3, -6, 2));
        assert_eq!((filters.rx.id, filters.rx.gain, filters.rx.rate), (3, 2, 4));
    }

    #[test]
    fn test_partial_line_keeps_matched_fields() {
        let filters = parse_fir_str("TX 1 GAIN -6 DEC 9\nRRX 10 20 30\n").unwrap();
        assert_eq!(filters.tx.id, 1);
        assert_eq!(filters.tx.gain, -6);
        assert_eq!(filters.tx.rate, 0);
        assert_eq!(filters.rx.path_clks, [10, 20, 30, 0, 0, 0]);
    }

    #[test]
    fn test_coefficients_fill_in_order() {
        let filters = parse_fir_str("-12,34\n0x10,010\n5,-5\n").unwrap();
        assert_eq!(&filters.tx.coef[..4], &[-12, 16, 5, 0]);
        assert_eq!(&filters.rx.coef[..4], &[34, 8, -5, 0]);
        assert_eq!(filters.tx.coef.len(), MAX_TAPS);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(TapBucket::classify(0).unwrap(), TapBucket::Taps64);
        assert_eq!(TapBucket::classify(64).unwrap(), TapBucket::Taps64);
        assert_eq!(TapBucket::classify(65).unwrap(), TapBucket::Taps128);
        assert_eq!(TapBucket::classify(128).unwrap(), TapBucket::Taps128);
        assert!(matches!(
            TapBucket::classify(129),
            Err(ConfigError::UnsupportedFilterLength { taps: 129, max: 128 })
        ));
    }

    #[test]
    fn test_sizes_use_bucket_not_count() {
        let filters = parse_fir_str(&coefficient_lines(40)).unwrap();
        assert_eq!(filters.tx.coef_size, 64);
        assert_eq!(filters.rx.coef_size, 64);
        assert_eq!(filters.tx.active_taps().len(), 64);
        assert!(filters.tx.active_taps()[40..].iter().all(|c| *c == 0));

        let filters = parse_fir_str(&coefficient_lines(65)).unwrap();
        assert_eq!(filters.tx.coef_size, 128);
        assert_eq!(filters.rx.coef_size, 128);
        assert_eq!(filters.rx.coef[64], -64);
    }

    #[test]
    fn test_lines_past_capacity_are_counted_not_stored() {
        let mut acc = FirAccumulator::new();
        for line in coefficient_lines(130).lines() {
            acc.push_line(line);
        }
        acc.push_line("BWTX 1000");
        assert_eq!(acc.coefficient_count(), 130);
        assert_eq!(acc.filters.tx.coef.len(), MAX_TAPS);
        assert_eq!(acc.filters.tx.coef[127], 127);
    }

    #[test]
    fn test_bucket_taps() {
        assert_eq!(TapBucket::Taps64.taps(), 64);
        assert_eq!(TapBucket::Taps128.taps(), MAX_TAPS);
    }

    #[test]
    fn test_too_many_taps_is_rejected() {
        let err = parse_fir_str(&coefficient_lines(130)).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFilterLength { taps: 130, .. }));
    }

    #[test]
    fn test_apply_to_record() {
        let filters = parse_fir_str("RTX 1 2 3 4 5 6\nRRX 7 8 9 10 11 12\nBWTX 18000000\nBWRX 19000000\n")
            .unwrap();
        let mut record = ConfigRecord::default();
        filters.apply_to(&mut record);
        assert_eq!(record.tx_path_clock_frequencies, [1, 2, 3, 4, 5, 6]);
        assert_eq!(record.rx_path_clock_frequencies, [7, 8, 9, 10, 11, 12]);
        assert_eq!(record.rf_tx_bandwidth_hz, 18_000_000);
        assert_eq!(record.rf_rx_bandwidth_hz, 19_000_000);
    }
}
