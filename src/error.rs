//! Error types for configuration ingestion.
//!
//! This module defines `ConfigError`, the single error type returned by both
//! parsers. Using the `thiserror` crate, each fatal condition gets its own
//! variant so callers can tell an unreadable file from a bad filter file.
//!
//! ## Error Kinds
//!
//! - **`Open`**: the configuration or filter file could not be opened. Nothing
//!   in the record has been touched.
//! - **`TokenizerInit`**: the file opened but its contents cannot be scanned
//!   (not valid UTF-8). The file handle is already closed when this is
//!   returned.
//! - **`Syntax`**: the YAML scanner rejected the stream part-way through.
//!   Fields assigned before the offending token keep their new values.
//! - **`Read`**: an I/O error while reading lines of the filter file.
//! - **`UnsupportedFilterLength`**: the filter file holds more coefficient
//!   pairs than the largest supported tap-count bucket.
//!
//! Unrecognised keys and malformed numbers are deliberately *not* errors:
//! they are absorbed where they occur and never reach the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results using the ingestion error type.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Fatal ingestion failure. See the module docs for when each kind occurs.
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum ConfigError {
    /// The file could not be opened.
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file opened but cannot be handed to the scanner.
    #[error("Failed to initialize tokenizer for {}: {reason}", path.display())]
    TokenizerInit { path: PathBuf, reason: String },

    /// The scanner rejected the stream at `line`/`column`.
    #[error("Syntax error at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Reading a line of the filter file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// More coefficient pairs than the largest bucket holds.
    #[error("Unsupported filter length: {taps} taps (at most {max} supported)")]
    UnsupportedFilterLength { taps: usize, max: usize },
}
