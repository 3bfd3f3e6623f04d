//! Generation inputs: grid layout, noise parameters and output profile.

use crate::error::MeshError;

/// Largest grid side whose vertex count still fits 32-bit indices (`65536² == 2³²`).
pub const MAX_GRID_SIZE: u32 = 1 << 16;

/// UV repeat count across the whole terrain, independent of resolution.
pub const UV_TILING: f32 = 10.0;

/// Grid topology and world-space extent of a terrain mesh.
///
/// Immutable for the lifetime of a [`crate::Terrain`]; only noise parameters
/// change between regenerations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Vertices per side. The mesh has `grid_size²` vertices.
    pub grid_size: u32,
    /// Side length of the square terrain in world units, centered on the origin.
    pub world_size: f32,
}

impl GridConfig {
    /// Create and validate a grid configuration.
    ///
    /// # Errors
    ///
    /// See [`GridConfig::validate`].
    pub fn new(grid_size: u32, world_size: f32) -> Result<Self, MeshError> {
        let grid = Self {
            grid_size,
            world_size,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Check the invariants required for triangulation.
    ///
    /// # Errors
    ///
    /// - [`MeshError::GridTooSmall`] if `grid_size < 2`
    /// - [`MeshError::GridTooLarge`] if `grid_size > MAX_GRID_SIZE`
    /// - [`MeshError::InvalidWorldSize`] if `world_size` is not positive and finite
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.grid_size < 2 {
            return Err(MeshError::GridTooSmall {
                grid_size: self.grid_size,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(MeshError::GridTooLarge {
                grid_size: self.grid_size,
            });
        }
        if !(self.world_size.is_finite() && self.world_size > 0.0) {
            return Err(MeshError::InvalidWorldSize(self.world_size));
        }
        Ok(())
    }

    /// Number of vertices in the grid (`grid_size²`).
    pub fn vertex_count(&self) -> usize {
        let n = self.grid_size as usize;
        n * n
    }

    /// Number of indices in the triangle list (`6 * (grid_size - 1)²`).
    pub fn index_count(&self) -> usize {
        let cells = self.grid_size.saturating_sub(1) as usize;
        6 * cells * cells
    }

    /// Row-major vertex index of grid cell `(x, z)`.
    pub fn vertex_index(&self, x: u32, z: u32) -> usize {
        z as usize * self.grid_size as usize + x as usize
    }
}

/// Fractal noise parameters, copied in on every generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    /// Maximum terrain height. Negative values invert the field.
    pub amplitude: f32,
    /// Frequency of the first octave, in cycles per world unit.
    pub frequency: f32,
    /// Number of octaves in the fractal sum. Each doubles frequency and halves amplitude.
    pub octaves: u32,
    /// Shift applied to both noise coordinates, moving the field without changing its shape.
    pub offset: f32,
}

impl NoiseParams {
    /// Check that the fractal sum is well defined.
    ///
    /// # Errors
    ///
    /// - [`MeshError::NoOctaves`] if `octaves == 0`
    /// - [`MeshError::NonFiniteParameter`] if any float is NaN or infinite
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.octaves == 0 {
            return Err(MeshError::NoOctaves);
        }
        for (name, value) in [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("offset", self.offset),
        ] {
            if !value.is_finite() {
                return Err(MeshError::NonFiniteParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            amplitude: 20.0,
            frequency: 0.08,
            octaves: 4,
            offset: 0.0,
        }
    }
}

/// Which vertex layout the packer emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputProfile {
    /// Position, normal, UV, tangent and bitangent (14 floats per vertex).
    #[default]
    TangentSpace,
    /// Position, normal and UV only (8 floats per vertex). Skips the tangent pass.
    Basic,
}

impl OutputProfile {
    /// Select a profile from an `include_tangent_space` flag.
    pub fn from_tangent_flag(include_tangent_space: bool) -> Self {
        if include_tangent_space {
            Self::TangentSpace
        } else {
            Self::Basic
        }
    }

    /// Whether the tangent-space pass runs for this profile.
    pub fn includes_tangent_space(self) -> bool {
        matches!(self, Self::TangentSpace)
    }

    /// Floats per packed vertex.
    pub fn stride_floats(self) -> usize {
        match self {
            Self::TangentSpace => 14,
            Self::Basic => 8,
        }
    }
}
