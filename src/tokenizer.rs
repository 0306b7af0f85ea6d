//! Token-driven ingestion of the main configuration file.
//!
//! The main file is a YAML document of `key: value` pairs. Rather than
//! deserializing it into a tree, the parser walks the scanner's token stream
//! and keeps a single bit of state:
//!
//! - a [`Token::Key`] marker switches to *expect-key*,
//! - a [`Token::Value`] marker switches to *expect-value*,
//! - a [`Token::Scalar`] is resolved as a key or assigned as a value
//!   depending on that state,
//! - every structural token (block mapping/sequence start, entry, end) is
//!   consumed without effect, and [`Token::StreamEnd`] stops the loop.
//!
//! The state is never inferred from scalar content. A key that does not
//! resolve leaves the retained field at the "unknown" sentinel, so the
//! value that follows it is skipped without error. Files may carry keys for
//! other device generations and still load.
//!
//! Raw scalar text is what gets converted. YAML's own typing (`0xFF` as an
//! integer, `ff` as a string) plays no part: each field decides its base.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, trace, warn};
use yaml_rust2::scanner::{Scanner, TokenType};

use crate::error::{ConfigError, Result};
use crate::keys::{self, Field};
use crate::record::ConfigRecord;

/// A token of the key/value stream, as far as ingestion cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// First token of every stream.
    StreamStart,
    /// End of input; ingestion stops here.
    StreamEnd,
    /// Marker preceding a mapping key.
    Key,
    /// Marker preceding a mapping value.
    Value,
    /// Start of an indented sequence.
    BlockSequenceStart,
    /// `-` entry marker.
    BlockEntry,
    /// Close of a block collection.
    BlockEnd,
    /// Start of an indented mapping.
    BlockMappingStart,
    /// Leaf value, with quoting already resolved.
    Scalar(String),
    /// Anything else the scanner produces (documents, flow collections,
    /// anchors, tags). Ignored like the structural tokens.
    Other,
}

impl From<TokenType> for Token {
    fn from(token_type: TokenType) -> Self {
        match token_type {
            TokenType::StreamStart(..) => Token::StreamStart,
            TokenType::StreamEnd => Token::StreamEnd,
            TokenType::Key => Token::Key,
            TokenType::Value => Token::Value,
            TokenType::BlockSequenceStart => Token::BlockSequenceStart,
            TokenType::BlockEntry => Token::BlockEntry,
            TokenType::BlockEnd => Token::BlockEnd,
            TokenType::BlockMappingStart => Token::BlockMappingStart,
            TokenType::Scalar(_, value) => Token::Scalar(value),
            _ => Token::Other,
        }
    }
}

/// Adapts the YAML scanner into a stream of [`Token`]s.
///
/// A scan error is yielded once as [`ConfigError::Syntax`] and ends the stream.
pub struct YamlTokens<'a> {
    scanner: Scanner<std::str::Chars<'a>>,
    finished: bool,
}

impl<'a> YamlTokens<'a> {
    /// Scans `text` from its first character.
    pub fn new(text: &'a str) -> Self {
        Self {
            scanner: Scanner::new(text.chars()),
            finished: false,
        }
    }
}

impl Iterator for YamlTokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scanner.next() {
            Some(yaml_rust2::scanner::Token(_, token_type)) => Some(Ok(token_type.into())),
            None => {
                self.finished = true;
                self.scanner.get_error().map(|err| {
                    Err(ConfigError::Syntax {
                        line: err.marker().line(),
                        column: err.marker().col(),
                        message: err.info().to_string(),
                    })
                })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectKey,
    ExpectValue,
}

/// Outcome of a successful ingestion pass. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Number of value scalars written into the record.
    pub assigned: usize,
    /// Keys that did not resolve, in the order they were seen.
    pub unknown_keys: Vec<String>,
}

/// Drives the key/value state machine over `tokens`, writing into `record`.
///
/// Stops at the first [`Token::StreamEnd`] (or when the tokens run out).
/// Only a token-source error aborts the pass.
pub fn ingest<I>(tokens: I, record: &mut ConfigRecord) -> Result<IngestSummary>
where
    I: IntoIterator<Item = Result<Token>>,
{
    let mut state = State::ExpectKey;
    let mut current: Option<Field> = None;
    let mut summary = IngestSummary::default();

    for token in tokens {
        match token? {
            Token::StreamEnd => break,
            Token::Key => state = State::ExpectKey,
            Token::Value => state = State::ExpectValue,
            Token::Scalar(text) => match state {
                State::ExpectKey => {
                    current = keys::resolve(&text);
                    match current {
                        Some(field) => trace!(%field, "resolved key"),
                        None => {
                            debug!(key = %text, "skipping unrecognised key");
                            summary.unknown_keys.push(text);
                        }
                    }
                }
                State::ExpectValue => {
                    if let Some(field) = current {
                        record.assign(field, &text);
                        summary.assigned += 1;
                        trace!(%field, raw = %text, value = record.get(field), "assigned");
                    }
                }
            },
            Token::StreamStart
            | Token::BlockSequenceStart
            | Token::BlockEntry
            | Token::BlockEnd
            | Token::BlockMappingStart
            | Token::Other => {}
        }
    }

    Ok(summary)
}

/// Ingests configuration text already held in memory.
pub fn ingest_str(text: &str, record: &mut ConfigRecord) -> Result<IngestSummary> {
    ingest(YamlTokens::new(text), record)
}

/// Opens, reads and ingests the configuration file at `path`.
///
/// Open and decode failures are reported before any record field is
/// touched. The file handle is closed before scanning starts.
pub fn ingest_file(path: impl AsRef<Path>, record: &mut ConfigRecord) -> Result<IngestSummary> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading configuration");

    let text = read_source(path)?;
    let summary = ingest_str(&text, record).inspect_err(|err| {
        warn!(path = %path.display(), %err, "configuration parse aborted");
    })?;

    debug!(
        path = %path.display(),
        assigned = summary.assigned,
        unknown = summary.unknown_keys.len(),
        "configuration loaded"
    );
    Ok(summary)
}

fn read_source(path: &Path) -> Result<String> {
    let bytes = {
        let mut file = File::open(path).map_err(|source| {
            warn!(path = %path.display(), %source, "failed to open configuration");
            ConfigError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        bytes
    };

    String::from_utf8(bytes).map_err(|err| ConfigError::TokenizerInit {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}
