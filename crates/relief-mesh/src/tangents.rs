//! Per-vertex tangent space from UV gradients.
//!
//! Face tangents and bitangents are derived from each triangle's edge vectors
//! and UV deltas, accumulated per vertex, then orthonormalized against the
//! vertex normal (Gram-Schmidt). The resulting bitangent is always
//! `normal × tangent`; the accumulated UV bitangent only decides
//! [`TangentFrame::handedness`].

use glam::{Vec2, Vec3};

use crate::topology::triangles;

/// UV determinants at or below this magnitude mark a face as degenerate.
pub const MIN_UV_DETERMINANT: f32 = 1e-12;

/// Orthonormal tangent basis for every vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TangentFrame {
    /// Unit tangents, orthogonal to the vertex normal.
    pub tangents: Vec<Vec3>,
    /// Unit bitangents, `normal × tangent`.
    pub bitangents: Vec<Vec3>,
    /// `+1.0` when `normal × tangent` agrees with the UV-space bitangent,
    /// `-1.0` when the UV mapping is mirrored relative to it.
    pub handedness: Vec<f32>,
    /// Faces skipped because their UV determinant was near zero.
    pub degenerate_faces: usize,
    /// Vertices whose tangent fell back to an arbitrary axis orthogonal to the normal.
    pub fallback_count: usize,
}

/// Tangent and bitangent of a single triangle, or `None` for a degenerate UV mapping.
pub fn face_tangents(p: [Vec3; 3], uv: [Vec2; 3]) -> Option<(Vec3, Vec3)> {
    let e1 = p[1] - p[0];
    let e2 = p[2] - p[0];
    let duv1 = uv[1] - uv[0];
    let duv2 = uv[2] - uv[0];

    let det = duv1.x * duv2.y - duv1.y * duv2.x;
    if !det.is_finite() || det.abs() <= MIN_UV_DETERMINANT {
        return None;
    }
    let r = det.recip();

    let tangent = (e1 * duv2.y - e2 * duv1.y) * r;
    let bitangent = (e2 * duv1.x - e1 * duv2.x) * r;
    Some((tangent, bitangent))
}

/// Build the tangent frame for a triangle mesh.
///
/// `positions`, `uvs` and `normals` are parallel per-vertex slices; `normals`
/// must already be unit length.
///
/// # Panics
///
/// Panics if the slices differ in length or an index is out of bounds.
pub fn build_tangents(
    positions: &[Vec3],
    uvs: &[Vec2],
    normals: &[Vec3],
    indices: &[u32],
) -> TangentFrame {
    assert_eq!(positions.len(), uvs.len(), "one UV per position");
    assert_eq!(positions.len(), normals.len(), "one normal per position");

    let count = positions.len();
    let mut tan_sums = vec![Vec3::ZERO; count];
    let mut bit_sums = vec![Vec3::ZERO; count];
    let mut degenerate_faces = 0;

    for tri in triangles(indices) {
        let p = tri.map(|i| positions[i]);
        let uv = tri.map(|i| uvs[i]);
        let Some((t, b)) = face_tangents(p, uv) else {
            degenerate_faces += 1;
            continue;
        };
        for i in tri {
            tan_sums[i] += t;
            bit_sums[i] += b;
        }
    }

    let mut tangents = Vec::with_capacity(count);
    let mut bitangents = Vec::with_capacity(count);
    let mut handedness = Vec::with_capacity(count);
    let mut fallback_count = 0;

    for ((&n, t_sum), b_sum) in normals.iter().zip(tan_sums).zip(bit_sums) {
        let t = (t_sum - n * n.dot(t_sum)).try_normalize().unwrap_or_else(|| {
            fallback_count += 1;
            n.any_orthonormal_vector()
        });
        let b = n.cross(t).normalize();

        tangents.push(t);
        bitangents.push(b);
        handedness.push(if b.dot(b_sum) < 0.0 { -1.0 } else { 1.0 });
    }

    TangentFrame {
        tangents,
        bitangents,
        handedness,
        degenerate_faces,
        fallback_count,
    }
}
