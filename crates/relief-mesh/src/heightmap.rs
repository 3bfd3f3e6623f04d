//! Heightmap synthesis: grid cells to world positions, fractal heights and UVs.
//!
//! The grid is centered on the origin in the XZ plane. Heights come from a
//! lacunarity-2 / persistence-0.5 fractal sum normalized to `[0, amplitude]`.

use glam::{Vec2, Vec3};

use crate::error::MeshError;
use crate::params::{GridConfig, NoiseParams, UV_TILING};
use crate::sampler::NoiseSampler;

const LACUNARITY: f64 = 2.0;
const PERSISTENCE: f64 = 0.5;

/// Per-vertex positions and texture coordinates of a synthesized grid, row-major.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Heightmap {
    /// World-space positions; `y` is the terrain height.
    pub positions: Vec<Vec3>,
    /// Texture coordinates tiled [`UV_TILING`] times across the terrain.
    pub uvs: Vec<Vec2>,
}

impl Heightmap {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the heightmap holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Lowest and highest `y`, or `None` for an empty heightmap.
    pub fn height_range(&self) -> Option<(f32, f32)> {
        self.positions.iter().map(|p| p.y).fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

/// Normalized fractal noise at a world-space point, in `[-1, 1]`.
///
/// Sums `octaves` rounds of `sampler` at doubling frequency and halving
/// weight, then divides by the total weight.
///
/// Gradient noise is zero on its integer lattice. When every sample
/// coordinate lands on a lattice point (integer world positions, an integer
/// frequency and an integer offset) the sum is zero whatever the offset, so
/// the offset only moves the field between lattice points.
pub fn fractal_noise(sampler: &dyn NoiseSampler, x: f32, z: f32, params: &NoiseParams) -> f64 {
    let offset = params.offset as f64;
    let mut freq = params.frequency as f64;
    let mut amp = 1.0;
    let mut sum = 0.0;
    let mut total = 0.0;

    for _ in 0..params.octaves {
        sum += sampler.sample(x as f64 * freq + offset, z as f64 * freq + offset) * amp;
        total += amp;
        freq *= LACUNARITY;
        amp *= PERSISTENCE;
    }

    if total > 0.0 { sum / total } else { 0.0 }
}

/// Terrain height at a world-space point: fractal noise remapped to `[0, 1]`
/// and scaled by `amplitude`.
pub fn height_at(sampler: &dyn NoiseSampler, x: f32, z: f32, params: &NoiseParams) -> f32 {
    let n = fractal_noise(sampler, x, z, params);
    ((n * 0.5 + 0.5) * params.amplitude as f64) as f32
}

/// Synthesize positions and UVs for every cell of `grid`.
///
/// Cell `(x, z)` lands at index [`GridConfig::vertex_index`].
///
/// # Errors
///
/// Returns a [`MeshError`] if `grid` or `params` fail validation.
pub fn synthesize(
    grid: &GridConfig,
    params: &NoiseParams,
    sampler: &dyn NoiseSampler,
) -> Result<Heightmap, MeshError> {
    grid.validate()?;
    params.validate()?;
    let n = grid.grid_size;
    let last = (n - 1) as f32;
    let count = grid.vertex_count();
    let mut positions = Vec::with_capacity(count);
    let mut uvs = Vec::with_capacity(count);

    for z in 0..n {
        for x in 0..n {
            let u = x as f32 / last;
            let v = z as f32 / last;
            let x_pos = (u - 0.5) * grid.world_size;
            let z_pos = (v - 0.5) * grid.world_size;
            let y_pos = height_at(sampler, x_pos, z_pos, params);

            debug_assert_eq!(positions.len(), grid.vertex_index(x, z));
            positions.push(Vec3::new(x_pos, y_pos, z_pos));
            uvs.push(Vec2::new(u, v) * UV_TILING);
        }
    }

    Ok(Heightmap { positions, uvs })
}
