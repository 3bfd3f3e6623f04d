//! Procedural terrain mesh generation: fractal heightmaps, grid triangulation,
//! smooth normals, tangent space, and GPU-ready vertex packing.

mod error;
mod generator;
mod mesh;
mod params;
mod terrain;

pub mod heightmap;
pub mod normals;
pub mod sampler;
pub mod tangents;
pub mod topology;
pub mod vertex;
pub mod vertex_format;

pub use error::MeshError;
pub use generator::{TerrainGenerator, generate};
pub use heightmap::{Heightmap, fractal_noise, height_at, synthesize};
pub use mesh::{MeshStats, TerrainMesh};
pub use normals::{FALLBACK_NORMAL, VertexNormals, accumulate_normals};
pub use params::{GridConfig, MAX_GRID_SIZE, NoiseParams, OutputProfile, UV_TILING};
pub use sampler::{CoherentNoise, NoiseKind, NoiseSampler, PerlinSampler, SimplexSampler};
pub use tangents::{TangentFrame, build_tangents};
pub use terrain::Terrain;
pub use topology::build_indices;
pub use vertex::{BasicVertex, PackedVertices, TerrainVertex, pack};
pub use vertex_format::{BASIC_VERTEX_LAYOUT, TERRAIN_VERTEX_LAYOUT, vertex_buffer_layout};
