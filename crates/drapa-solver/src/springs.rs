//! Spring topology: structural, shear, and bend links over the
//! particle index space.
//!
//! Springs are a relation between particle indices, not owners of
//! particles. The set is built once per topology and the insertion
//! order below is part of the contract: the relaxation solver sweeps
//! springs in this exact order, and changing it changes the (still
//! valid) convergence trajectory.

use drapa_mesh::ClothGrid;
use drapa_types::ParticleId;

/// A distance constraint between two particles.
///
/// The rest length is captured from the rest-pose distance at build
/// time and never recomputed from runtime geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    /// First endpoint.
    pub a: ParticleId,
    /// Second endpoint.
    pub b: ParticleId,
    /// Immutable rest length.
    pub rest_length: f32,
}

impl Spring {
    /// Creates a spring between two particle indices.
    pub fn new(a: usize, b: usize, rest_length: f32) -> Self {
        Self {
            a: ParticleId::from(a),
            b: ParticleId::from(b),
            rest_length,
        }
    }
}

/// Builds the full spring set for a grid.
///
/// Per cell, in insertion order:
/// - structural: right neighbor and down neighbor, rest = spacing
/// - shear: down-right and down-left diagonals, rest = spacing·√2
/// - bend: two-right and two-down, rest = spacing·2
///
/// Categories out of range on degenerate grids (single row/column) are
/// simply omitted. No deduplication is performed between categories;
/// on very small grids coincident pairs stay duplicated, which only
/// stiffens those links.
pub fn build_springs(grid: &ClothGrid) -> Vec<Spring> {
    let (w, h) = (grid.width(), grid.height());
    let s = grid.spacing();
    let shear_rest = s * std::f32::consts::SQRT_2;
    let bend_rest = s * 2.0;

    let mut springs = Vec::with_capacity(w * h * 6);
    for y in 0..h {
        for x in 0..w {
            let current = grid.index(x, y);

            if x + 1 < w {
                springs.push(Spring::new(current, grid.index(x + 1, y), s));
            }
            if y + 1 < h {
                springs.push(Spring::new(current, grid.index(x, y + 1), s));
            }

            if x + 1 < w && y + 1 < h {
                springs.push(Spring::new(current, grid.index(x + 1, y + 1), shear_rest));
            }
            if x > 0 && y + 1 < h {
                springs.push(Spring::new(current, grid.index(x - 1, y + 1), shear_rest));
            }

            if x + 2 < w {
                springs.push(Spring::new(current, grid.index(x + 2, y), bend_rest));
            }
            if y + 2 < h {
                springs.push(Spring::new(current, grid.index(x, y + 2), bend_rest));
            }
        }
    }
    springs
}
