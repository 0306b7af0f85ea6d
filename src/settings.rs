//! Where the configuration files live.
//!
//! The parsers take explicit paths; this module decides which paths. It is
//! layered with Figment, lowest precedence first:
//!
//! 1. Built-in defaults (`/etc/ad9361/config.yaml`, `/etc/ad9361/ad9361_fir.conf`)
//! 2. An optional TOML settings file
//! 3. Environment variables prefixed with `AD9361_`
//!
//! ```text
//! AD9361_CONFIG_FILE=/opt/radio/config.yaml
//! AD9361_FIR_FILE=/opt/radio/lte20.conf
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the main configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/ad9361/config.yaml";
/// Default location of the FIR filter file.
pub const DEFAULT_FIR_FILE: &str = "/etc/ad9361/ad9361_fir.conf";
/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "AD9361_";

/// Failure to assemble [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A provider could not be read or extracted.
    #[error("Settings load error: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// File locations for one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Main key/value configuration file.
    pub config_file: PathBuf,
    /// FIR filter coefficient file.
    pub fir_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            fir_file: PathBuf::from(DEFAULT_FIR_FILE),
        }
    }
}

impl Settings {
    /// The layered provider stack, exposed so callers can merge more on top.
    pub fn figment(settings_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        if let Some(path) = settings_file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads settings from defaults, the optional TOML file and the environment.
    pub fn load(settings_file: Option<&Path>) -> Result<Self, SettingsError> {
        Self::figment(settings_file)
            .extract()
            .map_err(|err| SettingsError::Load(Box::new(err)))
    }
}
