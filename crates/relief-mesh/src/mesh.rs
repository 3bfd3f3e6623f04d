//! The output of one generation pass: vertex and index buffers plus statistics.

use std::sync::Arc;

use crate::params::{GridConfig, NoiseParams, OutputProfile};
use crate::vertex::PackedVertices;

/// Summary of a generated mesh, including how many degenerate cases were recovered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshStats {
    /// Vertices in the mesh (`grid_size²`).
    pub vertex_count: usize,
    /// Triangles in the mesh (`2 * (grid_size - 1)²`).
    pub triangle_count: usize,
    /// Lowest vertex height.
    pub min_height: f32,
    /// Highest vertex height.
    pub max_height: f32,
    /// Vertices whose normal was replaced by the up vector.
    pub fallback_normals: usize,
    /// Vertices whose tangent was replaced by an arbitrary orthogonal axis.
    pub fallback_tangents: usize,
    /// Triangles skipped by the tangent pass for a near-singular UV mapping.
    pub degenerate_uv_faces: usize,
    /// Vertices whose UV mapping is mirrored relative to `normal × tangent`,
    /// so a shader reconstructing the bitangent must flip it.
    pub mirrored_tangents: usize,
}

/// A complete terrain mesh ready for a rendering backend.
///
/// Built in one pass and never mutated afterwards; regeneration produces a
/// new `TerrainMesh`. The index buffer is shared between meshes of the same
/// grid.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    /// Grid the mesh was built on.
    pub grid: GridConfig,
    /// Noise parameters the heights were synthesized from.
    pub params: NoiseParams,
    /// Interleaved vertex buffer.
    pub vertices: PackedVertices,
    /// Triangle list, 3 indices per triangle.
    pub indices: Arc<[u32]>,
    /// Counts and height range.
    pub stats: MeshStats,
}

impl TerrainMesh {
    /// Vertex layout profile of [`Self::vertices`].
    pub fn profile(&self) -> OutputProfile {
        self.vertices.profile()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the vertex data as a byte slice for GPU upload (zero-copy).
    pub fn vertex_bytes(&self) -> &[u8] {
        self.vertices.as_bytes()
    }

    /// Returns the index data as a byte slice for GPU upload (zero-copy).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices[..])
    }

    /// Total size of both buffers in bytes.
    pub fn buffer_bytes(&self) -> usize {
        self.vertices.byte_len() + self.indices.len() * std::mem::size_of::<u32>()
    }
}
