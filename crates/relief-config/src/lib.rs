//! Configuration for the terrain generator.
//!
//! Settings persist to disk as RON files and can be overridden from the
//! command line via clap.

mod cli;
mod config;
mod error;

use std::path::PathBuf;

pub use cli::CliArgs;
pub use config::{
    AMPLITUDE_RANGE, CONFIG_FILE, Config, DebugConfig, EditorSettings, FREQUENCY_RANGE,
    NoiseFamily, NoiseSettings, OCTAVES_RANGE, OFFSET_RANGE, OutputSettings, TerrainSettings,
};
pub use error::ConfigError;

const APP_NAME: &str = "relief";

/// Platform configuration directory for the generator (e.g. `~/.config/relief`).
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if the OS does not expose one.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(ConfigError::NoConfigDir)
}
