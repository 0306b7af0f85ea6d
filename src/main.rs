//! `ad9361-config`: load the transceiver configuration and print the result.
//!
//! Resolves file locations from settings (defaults, optional TOML file,
//! `AD9361_*` environment variables, then command-line flags), runs both
//! parsers against a fresh record and dumps the populated record and the
//! filter descriptors as YAML or JSON.

use std::path::PathBuf;

use ad9361_config::{fir, tokenizer, ConfigRecord, FirFilters, Settings};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "ad9361-config", version, about = "Load and dump AD9361 configuration files")]
struct Cli {
    /// Main key/value configuration file (overrides settings).
    #[arg(long)]
    config: Option<PathBuf>,

    /// FIR filter coefficient file (overrides settings).
    #[arg(long)]
    fir: Option<PathBuf>,

    /// Optional TOML file with `config_file` / `fir_file` entries.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Skip the FIR filter file.
    #[arg(long)]
    no_fir: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct Dump<'a> {
    record: &'a ConfigRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<&'a FirFilters>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unknown_keys: Vec<String>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    if verbose > 0 {
        filter = filter.add_directive(level.into());
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings =
        Settings::load(cli.settings.as_deref()).context("Failed to resolve file locations")?;
    if let Some(path) = cli.config {
        settings.config_file = path;
    }
    if let Some(path) = cli.fir {
        settings.fir_file = path;
    }

    let mut record = ConfigRecord::default();
    let summary = tokenizer::ingest_file(&settings.config_file, &mut record).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            settings.config_file.display()
        )
    })?;
    info!(assigned = summary.assigned, "configuration loaded");

    let filters = if cli.no_fir {
        None
    } else {
        let filters = fir::ingest_fir_file(&settings.fir_file, &mut record).with_context(|| {
            format!(
                "Failed to load FIR filter from {}",
                settings.fir_file.display()
            )
        })?;
        Some(filters)
    };

    let dump = Dump {
        record: &record,
        filters: filters.as_ref(),
        unknown_keys: summary.unknown_keys,
    };
    let output = match cli.format {
        OutputFormat::Yaml => serde_yaml::to_string(&dump)?,
        OutputFormat::Json => serde_json::to_string_pretty(&dump)?,
    };
    println!("{}", output);

    Ok(())
}
