//! The generation pipeline: heightmap, topology, normals, tangents, packing.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, debug_span};

use crate::error::MeshError;
use crate::heightmap::synthesize;
use crate::mesh::{MeshStats, TerrainMesh};
use crate::normals::accumulate_normals;
use crate::params::{GridConfig, NoiseParams, OutputProfile};
use crate::sampler::{NoiseSampler, PerlinSampler};
use crate::tangents::build_tangents;
use crate::topology::build_indices;
use crate::vertex::pack;

/// Turns grid and noise parameters into a [`TerrainMesh`].
///
/// Holds only the noise source and the output profile; every call runs the
/// full pipeline synchronously and allocates its own scratch buffers.
pub struct TerrainGenerator {
    sampler: Box<dyn NoiseSampler>,
    profile: OutputProfile,
}

impl TerrainGenerator {
    /// Create a generator over `sampler` emitting the tangent-space profile.
    pub fn new(sampler: Box<dyn NoiseSampler>) -> Self {
        Self {
            sampler,
            profile: OutputProfile::TangentSpace,
        }
    }

    /// Select the vertex layout to emit.
    pub fn with_profile(mut self, profile: OutputProfile) -> Self {
        self.profile = profile;
        self
    }

    /// The vertex layout this generator emits.
    pub fn profile(&self) -> OutputProfile {
        self.profile
    }

    /// Run the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns a [`MeshError`] if `grid` or `params` fail validation; nothing
    /// is computed in that case.
    pub fn generate(
        &self,
        grid: &GridConfig,
        params: &NoiseParams,
    ) -> Result<TerrainMesh, MeshError> {
        params.validate()?;
        let indices: Arc<[u32]> = build_indices(grid)?.into();
        self.build(grid, params, indices)
    }

    /// Run the pipeline with a prebuilt index buffer for `grid`.
    ///
    /// The caller guarantees `indices` came from [`build_indices`] for the
    /// same grid.
    pub(crate) fn build(
        &self,
        grid: &GridConfig,
        params: &NoiseParams,
        indices: Arc<[u32]>,
    ) -> Result<TerrainMesh, MeshError> {
        let _span = debug_span!("generate_terrain", grid_size = grid.grid_size).entered();
        let started = Instant::now();

        let heightmap = synthesize(grid, params, self.sampler.as_ref())?;
        let normals = accumulate_normals(&heightmap.positions, &indices);

        let frame = self.profile.includes_tangent_space().then(|| {
            build_tangents(
                &heightmap.positions,
                &heightmap.uvs,
                &normals.normals,
                &indices,
            )
        });

        let vertices = pack(
            &heightmap.positions,
            &normals.normals,
            &heightmap.uvs,
            frame.as_ref(),
        );

        let (min_height, max_height) = heightmap.height_range().unwrap_or_default();
        let stats = MeshStats {
            vertex_count: vertices.len(),
            triangle_count: indices.len() / 3,
            min_height,
            max_height,
            fallback_normals: normals.fallback_count,
            fallback_tangents: frame.as_ref().map_or(0, |f| f.fallback_count),
            degenerate_uv_faces: frame.as_ref().map_or(0, |f| f.degenerate_faces),
            mirrored_tangents: frame
                .as_ref()
                .map_or(0, |f| f.handedness.iter().filter(|&&h| h < 0.0).count()),
        };

        if stats.fallback_normals > 0 || stats.fallback_tangents > 0 {
            debug!(
                fallback_normals = stats.fallback_normals,
                fallback_tangents = stats.fallback_tangents,
                degenerate_uv_faces = stats.degenerate_uv_faces,
                "Recovered degenerate vertices"
            );
        }
        debug!(
            vertices = stats.vertex_count,
            triangles = stats.triangle_count,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Generated terrain mesh"
        );

        Ok(TerrainMesh {
            grid: *grid,
            params: *params,
            vertices,
            indices,
            stats,
        })
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new(Box::new(PerlinSampler::default()))
    }
}

/// Generate a tangent-space terrain mesh with the default Perlin sampler.
///
/// # Errors
///
/// Returns a [`MeshError`] for an invalid grid or noise parameters.
pub fn generate(
    grid_size: u32,
    world_size: f32,
    amplitude: f32,
    frequency: f32,
    octaves: u32,
    offset: f32,
) -> Result<TerrainMesh, MeshError> {
    let grid = GridConfig {
        grid_size,
        world_size,
    };
    let params = NoiseParams {
        amplitude,
        frequency,
        octaves,
        offset,
    };
    TerrainGenerator::default().generate(&grid, &params)
}
