//! Configuration ingestion for the AD9361 RF transceiver.
//!
//! Two plain-text sources describe the device's operating parameters:
//!
//! - a YAML `key: value` file, walked token by token by [`tokenizer`] and
//!   mapped onto record fields through the key table in [`keys`];
//! - a line-oriented FIR filter file, parsed by [`fir`], which also
//!   back-fills the path clocks and RF bandwidths of the record.
//!
//! Both write into a caller-owned [`ConfigRecord`] that is then handed to
//! the device initialisation. Neither parser knows about the other; they can
//! run in either order.
//!
//! ```no_run
//! use ad9361_config::{fir, tokenizer, ConfigRecord};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut record = ConfigRecord::default();
//!     tokenizer::ingest_file("/etc/ad9361/config.yaml", &mut record)?;
//!     let filters = fir::ingest_fir_file("/etc/ad9361/ad9361_fir.conf", &mut record)?;
//!     println!("{} taps, tx bandwidth {} Hz", filters.tx.coef_size, record.rf_tx_bandwidth_hz);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fir;
pub mod keys;
pub mod numeric;
pub mod record;
pub mod settings;
pub mod tokenizer;

pub use error::{ConfigError, Result};
pub use fir::{FirConfig, FirFilters, TapBucket};
pub use keys::Field;
pub use record::ConfigRecord;
pub use settings::Settings;
pub use tokenizer::IngestSummary;
