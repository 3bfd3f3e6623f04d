//! Shared-vertex grid triangulation.

use crate::error::MeshError;
use crate::params::GridConfig;

/// Build the triangle list for a `grid_size × grid_size` vertex grid.
///
/// Each cell with top-left vertex `i = z * n + x` becomes two triangles,
/// `(i, i+1, i+n)` and `(i+1, i+n+1, i+n)`. Every triangle in the grid shares
/// this winding, which normal accumulation relies on. The result depends only
/// on `grid_size` and has exactly `6 * (n - 1)²` entries.
///
/// # Errors
///
/// Returns a [`MeshError`] if `grid` fails validation.
pub fn build_indices(grid: &GridConfig) -> Result<Vec<u32>, MeshError> {
    grid.validate()?;
    let n = grid.grid_size;
    let mut indices = Vec::with_capacity(grid.index_count());

    for z in 0..n - 1 {
        for x in 0..n - 1 {
            let i = grid.vertex_index(x, z) as u32;
            indices.extend_from_slice(&[i, i + 1, i + n, i + 1, i + n + 1, i + n]);
        }
    }

    Ok(indices)
}

/// Iterate over the triangles of an index list as `[a, b, c]` vertex indices.
///
/// Trailing indices that do not form a full triangle are ignored.
pub fn triangles(indices: &[u32]) -> impl Iterator<Item = [usize; 3]> + '_ {
    indices
        .chunks_exact(3)
        .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
}
