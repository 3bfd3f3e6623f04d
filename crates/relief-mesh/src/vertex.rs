//! Interleaved vertex records ready for GPU upload.
//!
//! [`TerrainVertex`] carries the full tangent-space layout (14 floats,
//! 56 bytes); [`BasicVertex`] drops tangent and bitangent (8 floats,
//! 32 bytes). Field order is fixed: position, normal, uv, tangent, bitangent.

use glam::{Vec2, Vec3};

use crate::params::OutputProfile;
use crate::tangents::TangentFrame;

/// A terrain vertex with a full tangent basis, for normal-mapped shading.
///
/// Layout (56 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..32]` uv `[f32; 2]`
///   - `[32..44]` tangent `[f32; 3]`
///   - `[44..56]` bitangent `[f32; 3]`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Tiled texture coordinates.
    pub uv: [f32; 2],
    /// Unit tangent, orthogonal to `normal`.
    pub tangent: [f32; 3],
    /// Unit bitangent, `normal × tangent`.
    pub bitangent: [f32; 3],
}

static_assertions::assert_eq_size!(TerrainVertex, [f32; 14]);

/// A terrain vertex without tangent space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BasicVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Tiled texture coordinates.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(BasicVertex, [f32; 8]);

/// The vertex buffer of a terrain mesh in one of the two output profiles.
#[derive(Clone, Debug, PartialEq)]
pub enum PackedVertices {
    /// [`TerrainVertex`] records.
    TangentSpace(Vec<TerrainVertex>),
    /// [`BasicVertex`] records.
    Basic(Vec<BasicVertex>),
}

impl PackedVertices {
    /// The profile these vertices were packed for.
    pub fn profile(&self) -> OutputProfile {
        match self {
            Self::TangentSpace(_) => OutputProfile::TangentSpace,
            Self::Basic(_) => OutputProfile::Basic,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        match self {
            Self::TangentSpace(v) => v.len(),
            Self::Basic(v) => v.len(),
        }
    }

    /// Returns `true` if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Floats per vertex.
    pub fn stride_floats(&self) -> usize {
        self.profile().stride_floats()
    }

    /// Bytes per vertex.
    pub fn stride_bytes(&self) -> usize {
        self.stride_floats() * std::mem::size_of::<f32>()
    }

    /// The buffer as a flat float slice, `stride_floats()` per vertex.
    pub fn as_floats(&self) -> &[f32] {
        match self {
            Self::TangentSpace(v) => bytemuck::cast_slice(v),
            Self::Basic(v) => bytemuck::cast_slice(v),
        }
    }

    /// The buffer as bytes for GPU upload (zero-copy).
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::TangentSpace(v) => bytemuck::cast_slice(v),
            Self::Basic(v) => bytemuck::cast_slice(v),
        }
    }

    /// Size of the buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * self.stride_bytes()
    }

    /// Position of vertex `index`, if it exists.
    pub fn position(&self, index: usize) -> Option<Vec3> {
        let p = match self {
            Self::TangentSpace(v) => v.get(index)?.position,
            Self::Basic(v) => v.get(index)?.position,
        };
        Some(Vec3::from_array(p))
    }

    /// Normal of vertex `index`, if it exists.
    pub fn normal(&self, index: usize) -> Option<Vec3> {
        let n = match self {
            Self::TangentSpace(v) => v.get(index)?.normal,
            Self::Basic(v) => v.get(index)?.normal,
        };
        Some(Vec3::from_array(n))
    }

    /// The tangent-space records, or `None` for the basic profile.
    pub fn tangent_space(&self) -> Option<&[TerrainVertex]> {
        match self {
            Self::TangentSpace(v) => Some(v),
            Self::Basic(_) => None,
        }
    }
}

/// Interleave per-vertex attributes into packed records.
///
/// With a tangent frame the result uses [`TerrainVertex`]; without one it
/// uses [`BasicVertex`].
///
/// # Panics
///
/// Panics if the attribute slices differ in length.
pub fn pack(
    positions: &[Vec3],
    normals: &[Vec3],
    uvs: &[Vec2],
    frame: Option<&TangentFrame>,
) -> PackedVertices {
    assert_eq!(positions.len(), normals.len(), "one normal per position");
    assert_eq!(positions.len(), uvs.len(), "one UV per position");

    let Some(frame) = frame else {
        let vertices = positions
            .iter()
            .zip(normals)
            .zip(uvs)
            .map(|((p, n), uv)| BasicVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect();
        return PackedVertices::Basic(vertices);
    };

    assert_eq!(positions.len(), frame.tangents.len(), "one tangent per position");
    assert_eq!(positions.len(), frame.bitangents.len(), "one bitangent per position");

    let vertices = (0..positions.len())
        .map(|i| TerrainVertex {
            position: positions[i].to_array(),
            normal: normals[i].to_array(),
            uv: uvs[i].to_array(),
            tangent: frame.tangents[i].to_array(),
            bitangent: frame.bitangents[i].to_array(),
        })
        .collect();
    PackedVertices::TangentSpace(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    fn sample_frame() -> TangentFrame {
        TangentFrame {
            tangents: vec![Vec3::X, Vec3::X],
            bitangents: vec![Vec3::NEG_Z, Vec3::NEG_Z],
            handedness: vec![-1.0, -1.0],
            degenerate_faces: 0,
            fallback_count: 0,
        }
    }

    #[test]
    fn test_record_sizes() {
        assert_eq!(mem::size_of::<TerrainVertex>(), 56);
        assert_eq!(mem::size_of::<BasicVertex>(), 32);
    }

    #[test]
    fn test_field_offsets() {
        assert_eq!(mem::offset_of!(TerrainVertex, position), 0);
        assert_eq!(mem::offset_of!(TerrainVertex, normal), 12);
        assert_eq!(mem::offset_of!(TerrainVertex, uv), 24);
        assert_eq!(mem::offset_of!(TerrainVertex, tangent), 32);
        assert_eq!(mem::offset_of!(TerrainVertex, bitangent), 44);
        assert_eq!(mem::offset_of!(BasicVertex, uv), 24);
    }

    #[test]
    fn test_interleaving_order() {
        let positions = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(7.0, 8.0, 9.0)];
        let normals = [Vec3::Y, Vec3::Y];
        let uvs = [Vec2::new(0.5, 0.25), Vec2::new(10.0, 10.0)];
        let packed = pack(&positions, &normals, &uvs, Some(&sample_frame()));

        assert_eq!(packed.stride_floats(), 14);
        let floats = packed.as_floats();
        assert_eq!(floats.len(), 28);
        assert_eq!(
            &floats[..14],
            &[1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 0.5, 0.25, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0]
        );
        assert_eq!(&floats[14..17], &[7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_basic_profile_omits_tangent_space() {
        let positions = [Vec3::ONE];
        let packed = pack(&positions, &[Vec3::Y], &[Vec2::new(3.0, 4.0)], None);
        assert_eq!(packed.profile(), OutputProfile::Basic);
        assert_eq!(packed.as_floats(), &[1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 3.0, 4.0]);
        assert!(packed.tangent_space().is_none());
        assert_eq!(packed.byte_len(), 32);
        assert_eq!(packed.as_bytes().len(), 32);
    }

    #[test]
    fn test_accessors() {
        let positions = [Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO];
        let packed = pack(&positions, &[Vec3::Y; 2], &[Vec2::ZERO; 2], Some(&sample_frame()));
        assert_eq!(packed.len(), 2);
        assert_eq!(packed.position(0), Some(positions[0]));
        assert_eq!(packed.normal(1), Some(Vec3::Y));
        assert_eq!(packed.position(2), None);
        assert_eq!(packed.stride_bytes(), 56);
    }
}
