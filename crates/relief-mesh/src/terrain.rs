//! A terrain instance: fixed grid, current mesh, regenerated on demand.

use std::sync::Arc;

use tracing::info;

use crate::error::MeshError;
use crate::generator::TerrainGenerator;
use crate::mesh::TerrainMesh;
use crate::params::{GridConfig, NoiseParams};
use crate::topology::build_indices;

/// Owns one grid and the mesh most recently generated on it.
///
/// The index buffer depends only on the grid, so it is built once and shared
/// by every mesh this terrain produces. [`Terrain::regenerate`] builds the
/// replacement mesh completely before swapping it in; readers never see a
/// partially written mesh, and a rejected call keeps the previous one.
pub struct Terrain {
    grid: GridConfig,
    generator: TerrainGenerator,
    indices: Arc<[u32]>,
    mesh: Option<TerrainMesh>,
    generation: u64,
}

impl Terrain {
    /// Create a terrain over `grid` with no mesh yet.
    ///
    /// # Errors
    ///
    /// Returns a [`MeshError`] if `grid` is invalid.
    pub fn new(grid: GridConfig, generator: TerrainGenerator) -> Result<Self, MeshError> {
        let indices = build_indices(&grid)?.into();
        Ok(Self {
            grid,
            generator,
            indices,
            mesh: None,
            generation: 0,
        })
    }

    /// The grid this terrain was created with.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// The current mesh, if one has been generated.
    pub fn mesh(&self) -> Option<&TerrainMesh> {
        self.mesh.as_ref()
    }

    /// Number of successful regenerations so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rebuild the mesh from `params` and replace the current one.
    ///
    /// Always runs the whole pipeline; callers driving this from continuous
    /// input should debounce first.
    ///
    /// # Errors
    ///
    /// Returns a [`MeshError`] if `params` is invalid. The current mesh is
    /// left untouched.
    pub fn regenerate(&mut self, params: &NoiseParams) -> Result<&TerrainMesh, MeshError> {
        params.validate()?;
        let mesh = self
            .generator
            .build(&self.grid, params, Arc::clone(&self.indices))?;
        self.generation += 1;
        info!(
            generation = self.generation,
            amplitude = params.amplitude,
            frequency = params.frequency,
            octaves = params.octaves,
            offset = params.offset,
            "Regenerated terrain"
        );
        Ok(&*self.mesh.insert(mesh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terrain(n: u32) -> Terrain {
        Terrain::new(GridConfig::new(n, 16.0).unwrap(), TerrainGenerator::default()).unwrap()
    }

    #[test]
    fn test_starts_without_mesh() {
        let t = terrain(4);
        assert!(t.mesh().is_none());
        assert_eq!(t.generation(), 0);
    }

    #[test]
    fn test_rejects_invalid_grid() {
        let grid = GridConfig {
            grid_size: 0,
            world_size: 1.0,
        };
        assert!(matches!(
            Terrain::new(grid, TerrainGenerator::default()),
            Err(MeshError::GridTooSmall { grid_size: 0 })
        ));
    }

    #[test]
    fn test_regeneration_shares_topology() {
        let mut t = terrain(6);
        let first = Arc::clone(&t.regenerate(&NoiseParams::default()).unwrap().indices);
        let second = NoiseParams {
            offset: 3.7,
            ..Default::default()
        };
        let again = &t.regenerate(&second).unwrap().indices;
        assert!(Arc::ptr_eq(&first, again));
        assert_eq!(t.generation(), 2);
    }

    #[test]
    fn test_failed_regeneration_keeps_previous_mesh() {
        let mut t = terrain(5);
        let params = NoiseParams::default();
        let before = t.regenerate(&params).unwrap().vertices.clone();

        let bad = NoiseParams {
            amplitude: f32::NAN,
            ..params
        };
        assert!(t.regenerate(&bad).is_err());
        let mesh = t.mesh().unwrap();
        assert_eq!(mesh.vertices, before);
        assert_eq!(mesh.params, params);
        assert_eq!(t.generation(), 1);
    }
}
