//! Configuration structs with defaults and RON persistence.

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Editor slider range for [`NoiseSettings::amplitude`].
pub const AMPLITUDE_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Editor slider range for [`NoiseSettings::frequency`].
pub const FREQUENCY_RANGE: RangeInclusive<f32> = 0.0..=1.0;
/// Editor slider range for [`NoiseSettings::octaves`].
pub const OCTAVES_RANGE: RangeInclusive<u32> = 1..=8;
/// Editor slider range for [`NoiseSettings::offset`].
pub const OFFSET_RANGE: RangeInclusive<f32> = -1000.0..=1000.0;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid layout.
    pub terrain: TerrainSettings,
    /// Fractal noise parameters.
    pub noise: NoiseSettings,
    /// Vertex output settings.
    pub output: OutputSettings,
    /// Interactive editing settings.
    pub editor: EditorSettings,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Grid resolution and world extent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainSettings {
    /// Vertices per side.
    pub grid_size: u32,
    /// Side length of the terrain in world units.
    pub world_size: f32,
}

/// Which noise family drives the heightmap.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum NoiseFamily {
    /// Classic gradient noise.
    #[default]
    Perlin,
    /// Simplex noise.
    Simplex,
}

/// Fractal noise parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseSettings {
    /// Maximum terrain height.
    pub amplitude: f32,
    /// First-octave frequency.
    pub frequency: f32,
    /// Octave count.
    pub octaves: u32,
    /// Coordinate offset.
    pub offset: f32,
    /// Permutation seed of the noise generator.
    pub seed: u32,
    /// Noise family.
    pub family: NoiseFamily,
}

impl NoiseSettings {
    /// Copy with every parameter clamped to its editor slider range.
    pub fn clamped(&self) -> Self {
        Self {
            amplitude: clamp_f32(self.amplitude, &AMPLITUDE_RANGE),
            frequency: clamp_f32(self.frequency, &FREQUENCY_RANGE),
            octaves: self.octaves.clamp(*OCTAVES_RANGE.start(), *OCTAVES_RANGE.end()),
            offset: clamp_f32(self.offset, &OFFSET_RANGE),
            ..self.clone()
        }
    }
}

fn clamp_f32(value: f32, range: &RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

/// Vertex buffer layout selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    /// Emit tangents and bitangents (14 floats per vertex) or not (8 floats).
    pub include_tangent_space: bool,
}

/// Interactive editing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorSettings {
    /// Minimum time between two regenerations while a parameter is being dragged.
    pub regen_interval_ms: u64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            grid_size: 256,
            world_size: 64.0,
        }
    }
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            amplitude: 20.0,
            frequency: 0.08,
            octaves: 4,
            offset: 0.0,
            seed: 0,
            family: NoiseFamily::Perlin,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            include_tangent_space: true,
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            regen_interval_ms: 50,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
