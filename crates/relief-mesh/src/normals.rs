//! Smooth per-vertex normals by face-normal accumulation.

use glam::Vec3;

use crate::topology::triangles;

/// Normal substituted for vertices whose adjacent faces cancel or collapse.
pub const FALLBACK_NORMAL: Vec3 = Vec3::Y;

/// Per-vertex unit normals plus the number of vertices that needed the fallback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexNormals {
    /// One unit normal per vertex.
    pub normals: Vec<Vec3>,
    /// Vertices whose accumulated normal was zero and got [`FALLBACK_NORMAL`].
    pub fallback_count: usize,
}

/// Un-normalized normal of triangle `(a, b, c)`; its length is twice the area.
///
/// Oriented so that the grid winding produced by
/// [`crate::topology::build_indices`] faces `+Y` on a flat terrain.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (c - a).cross(b - a)
}

/// Accumulate face normals onto their corner vertices and normalize.
///
/// Larger faces contribute proportionally more through the cross-product
/// magnitude. A vertex whose sum is zero (only degenerate or cancelling
/// faces) gets [`FALLBACK_NORMAL`] instead of a NaN direction.
///
/// # Panics
///
/// Panics if an index is out of bounds for `positions`.
pub fn accumulate_normals(positions: &[Vec3], indices: &[u32]) -> VertexNormals {
    let mut sums = vec![Vec3::ZERO; positions.len()];

    for [a, b, c] in triangles(indices) {
        let n = face_normal(positions[a], positions[b], positions[c]);
        sums[a] += n;
        sums[b] += n;
        sums[c] += n;
    }

    let mut fallback_count = 0;
    let normals = sums
        .into_iter()
        .map(|sum| {
            sum.try_normalize().unwrap_or_else(|| {
                fallback_count += 1;
                FALLBACK_NORMAL
            })
        })
        .collect();

    VertexNormals {
        normals,
        fallback_count,
    }
}
