//! Turns loaded configuration into generator inputs.

use relief_config::{Config, NoiseFamily, NoiseSettings};
use relief_mesh::{
    GridConfig, MeshError, NoiseKind, NoiseParams, OutputProfile, Terrain, TerrainGenerator,
};

/// Errors surfaced by the application layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded or saved.
    #[error(transparent)]
    Config(#[from] relief_config::ConfigError),

    /// The configured terrain was rejected by the generator.
    #[error("invalid terrain configuration: {0}")]
    Mesh(#[from] MeshError),
}

/// Grid layout from the `terrain` section.
///
/// # Errors
///
/// Returns a [`MeshError`] if the grid is too small, too large, or has a bad world size.
pub fn grid_config(config: &Config) -> Result<GridConfig, MeshError> {
    GridConfig::new(config.terrain.grid_size, config.terrain.world_size)
}

/// Noise parameters from the `noise` section, clamped to the editor slider ranges.
pub fn noise_params(settings: &NoiseSettings) -> NoiseParams {
    let settings = settings.clamped();
    NoiseParams {
        amplitude: settings.amplitude,
        frequency: settings.frequency,
        octaves: settings.octaves,
        offset: settings.offset,
    }
}

/// Core noise kind for a configured family.
pub fn noise_kind(family: NoiseFamily) -> NoiseKind {
    match family {
        NoiseFamily::Perlin => NoiseKind::Perlin,
        NoiseFamily::Simplex => NoiseKind::Simplex,
    }
}

/// Generator with the configured sampler and output profile.
pub fn build_generator(config: &Config) -> TerrainGenerator {
    let sampler = noise_kind(config.noise.family).sampler(config.noise.seed);
    TerrainGenerator::new(sampler).with_profile(OutputProfile::from_tangent_flag(
        config.output.include_tangent_space,
    ))
}

/// An empty terrain for the configured grid.
///
/// # Errors
///
/// Returns a [`MeshError`] if the grid is invalid.
pub fn build_terrain(config: &Config) -> Result<Terrain, MeshError> {
    Terrain::new(grid_config(config)?, build_generator(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_terrain() {
        let terrain = build_terrain(&Config::default()).unwrap();
        assert_eq!(terrain.grid().grid_size, 256);
        assert_eq!(terrain.grid().world_size, 64.0);
    }

    #[test]
    fn test_invalid_grid_is_rejected() {
        let mut config = Config::default();
        config.terrain.grid_size = 1;
        assert!(matches!(
            build_terrain(&config),
            Err(MeshError::GridTooSmall { grid_size: 1 })
        ));
    }

    #[test]
    fn test_noise_params_copy_settings() {
        let settings = NoiseSettings {
            amplitude: 7.0,
            frequency: 0.5,
            octaves: 2,
            offset: -3.0,
            ..Default::default()
        };
        assert_eq!(
            noise_params(&settings),
            NoiseParams {
                amplitude: 7.0,
                frequency: 0.5,
                octaves: 2,
                offset: -3.0,
            }
        );
    }

    #[test]
    fn test_noise_params_clamp_out_of_range_settings() {
        let settings = NoiseSettings {
            amplitude: 250.0,
            frequency: -0.2,
            octaves: 0,
            offset: -5000.0,
            ..Default::default()
        };
        let params = noise_params(&settings);
        assert_eq!(params.amplitude, 100.0);
        assert_eq!(params.frequency, 0.0);
        assert_eq!(params.octaves, 1);
        assert_eq!(params.offset, -1000.0);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_output_profile_follows_config() {
        let mut config = Config::default();
        config.output.include_tangent_space = false;
        assert_eq!(build_generator(&config).profile(), OutputProfile::Basic);
        config.output.include_tangent_space = true;
        assert_eq!(build_generator(&config).profile(), OutputProfile::TangentSpace);
    }

    #[test]
    fn test_family_mapping() {
        assert_eq!(noise_kind(NoiseFamily::Perlin), NoiseKind::Perlin);
        assert_eq!(noise_kind(NoiseFamily::Simplex), NoiseKind::Simplex);
    }
}
