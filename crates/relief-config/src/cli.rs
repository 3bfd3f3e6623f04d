//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;
use crate::config::NoiseFamily;

/// Terrain generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "relief", about = "Procedural terrain mesh generator")]
pub struct CliArgs {
    /// Vertices per side of the terrain grid.
    #[arg(long)]
    pub grid_size: Option<u32>,

    /// Side length of the terrain in world units.
    #[arg(long)]
    pub world_size: Option<f32>,

    /// Maximum terrain height.
    #[arg(long, allow_negative_numbers = true)]
    pub amplitude: Option<f32>,

    /// First-octave noise frequency.
    #[arg(long)]
    pub frequency: Option<f32>,

    /// Number of noise octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Noise coordinate offset.
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<f32>,

    /// Noise permutation seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Noise family.
    #[arg(long, value_enum)]
    pub noise: Option<NoiseFamily>,

    /// Emit position, normal and UV only (no tangent space).
    #[arg(long)]
    pub no_tangents: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(n) = args.grid_size {
            self.terrain.grid_size = n;
        }
        if let Some(size) = args.world_size {
            self.terrain.world_size = size;
        }
        if let Some(amp) = args.amplitude {
            self.noise.amplitude = amp;
        }
        if let Some(freq) = args.frequency {
            self.noise.frequency = freq;
        }
        if let Some(oct) = args.octaves {
            self.noise.octaves = oct;
        }
        if let Some(ofs) = args.offset {
            self.noise.offset = ofs;
        }
        if let Some(seed) = args.seed {
            self.noise.seed = seed;
        }
        if let Some(family) = args.noise {
            self.noise.family = family;
        }
        if args.no_tangents {
            self.output.include_tangent_space = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
