//! Vertex normal recomputation from current particle positions.
//!
//! Pure derived geometry: the triangulation is static, the positions
//! change every step, and the normals are rebuilt from scratch each
//! time. Each triangle contributes its (unit, when non-degenerate)
//! face normal to all three of its vertices.

use glam::Vec3;

use drapa_types::constants::DEGENERATE_NORMAL_EPSILON;

/// Fallback direction for vertices whose accumulated normal is
/// degenerate (all incident triangles collapsed).
pub const FALLBACK_NORMAL: Vec3 = Vec3::Z;

/// Recomputes every vertex normal in place.
///
/// `positions` and `normals` are parallel arrays; `indices` is the flat
/// triangulation. Face normals are normalized before accumulation when
/// non-degenerate, so each incident triangle contributes equally
/// regardless of its area. A vertex whose accumulated normal is
/// zero-length gets [`FALLBACK_NORMAL`] instead of a NaN.
pub fn compute_vertex_normals(positions: &[Vec3], indices: &[u32], normals: &mut [Vec3]) {
    debug_assert_eq!(positions.len(), normals.len());
    debug_assert_eq!(indices.len() % 3, 0);

    normals.fill(Vec3::ZERO);

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);

        let mut n = (positions[i1] - positions[i0]).cross(positions[i2] - positions[i0]);
        if n.length_squared() > DEGENERATE_NORMAL_EPSILON {
            n = n.normalize();
        }

        normals[i0] += n;
        normals[i1] += n;
        normals[i2] += n;
    }

    for n in normals.iter_mut() {
        *n = if n.length_squared() > DEGENERATE_NORMAL_EPSILON {
            n.normalize()
        } else {
            FALLBACK_NORMAL
        };
    }
}
