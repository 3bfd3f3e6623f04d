//! Mesh generation error types.

/// Errors that reject a generation request before any computation runs.
///
/// Degenerate geometry and degenerate UV mappings are not errors: they are
/// recovered per vertex and counted in [`crate::MeshStats`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// Fewer than two vertices per side, so no triangle can form.
    #[error("grid size must be at least 2, got {grid_size}")]
    GridTooSmall {
        /// The rejected grid size.
        grid_size: u32,
    },

    /// `grid_size²` vertices cannot be addressed with 32-bit indices.
    #[error("grid size {grid_size} overflows 32-bit vertex indices")]
    GridTooLarge {
        /// The rejected grid size.
        grid_size: u32,
    },

    /// World extent must be positive and finite.
    #[error("world size must be positive and finite, got {0}")]
    InvalidWorldSize(f32),

    /// The fractal sum needs at least one octave.
    #[error("octave count must be at least 1")]
    NoOctaves,

    /// A noise parameter is NaN or infinite.
    #[error("noise parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter {
        /// Parameter name (`amplitude`, `frequency` or `offset`).
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}
