//! `wgpu::VertexBufferLayout`s matching the packed terrain vertex records.
//!
//! Render pipelines drawing a [`crate::TerrainMesh`] bind the layout for the
//! mesh's [`OutputProfile`] so attribute offsets never drift from the records.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field     | Profile        |
//! |----------|--------|-----------|-----------|----------------|
//! | 0        | 0      | Float32x3 | position  | both           |
//! | 1        | 12     | Float32x3 | normal    | both           |
//! | 2        | 24     | Float32x2 | uv        | both           |
//! | 3        | 32     | Float32x3 | tangent   | tangent space  |
//! | 4        | 44     | Float32x3 | bitangent | tangent space  |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::params::OutputProfile;
use crate::vertex::{BasicVertex, TerrainVertex};

/// Attributes of [`TerrainVertex`], shader locations 0 through 4.
pub const TERRAIN_VERTEX_ATTRIBUTES: [VertexAttribute; 5] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(TerrainVertex, position) as u64,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(TerrainVertex, normal) as u64,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: mem::offset_of!(TerrainVertex, uv) as u64,
        shader_location: 2,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(TerrainVertex, tangent) as u64,
        shader_location: 3,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(TerrainVertex, bitangent) as u64,
        shader_location: 4,
    },
];

/// Attributes of [`BasicVertex`], shader locations 0 through 2.
pub const BASIC_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(BasicVertex, position) as u64,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: mem::offset_of!(BasicVertex, normal) as u64,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: mem::offset_of!(BasicVertex, uv) as u64,
        shader_location: 2,
    },
];

/// Buffer layout for the tangent-space profile (56-byte stride).
pub const TERRAIN_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<TerrainVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &TERRAIN_VERTEX_ATTRIBUTES,
};

/// Buffer layout for the basic profile (32-byte stride).
pub const BASIC_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<BasicVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &BASIC_VERTEX_ATTRIBUTES,
};

/// The vertex buffer layout matching `profile`.
pub fn vertex_buffer_layout(profile: OutputProfile) -> VertexBufferLayout<'static> {
    match profile {
        OutputProfile::TangentSpace => TERRAIN_VERTEX_LAYOUT,
        OutputProfile::Basic => BASIC_VERTEX_LAYOUT,
    }
}

const _: () = assert!(TERRAIN_VERTEX_ATTRIBUTES[4].offset + 12 == mem::size_of::<TerrainVertex>() as u64);
const _: () = assert!(BASIC_VERTEX_ATTRIBUTES[2].offset + 8 == mem::size_of::<BasicVertex>() as u64);
