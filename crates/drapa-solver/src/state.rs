//! Particle state — SoA channel buffers for all per-particle data.
//!
//! This is the primary mutable data structure during simulation. The
//! integrator, the relaxation solver, and the interaction surface all
//! read and write these buffers; nothing else may.
//!
//! # Layout
//!
//! All channels have length `particle_count` and are indexed by the
//! same stable particle index space fixed at topology-build time:
//!
//! ```text
//! positions:      current position per particle
//! prev_positions: previous position (implicit-velocity carrier)
//! accelerations:  force accumulator, cleared every step
//! rest_positions: captured at build, immutable thereafter
//! fixed:          pin flags
//! uvs:            static texture coordinates
//! normals:        derived each step from the triangulation
//! ```

use glam::{Vec2, Vec3};

use drapa_mesh::ClothGrid;

/// SoA particle buffers owned by one `Cloth` instance.
pub struct ParticleStore {
    /// Current positions.
    pub positions: Vec<Vec3>,
    /// Positions from the previous step; `pos - prev` is the implied
    /// velocity, so no explicit velocity channel exists.
    pub prev_positions: Vec<Vec3>,
    /// Accumulated acceleration, zeroed after each integration.
    pub accelerations: Vec<Vec3>,
    /// Rest pose captured at construction; the reset target.
    pub rest_positions: Vec<Vec3>,
    /// Pin flags. A fixed particle is never touched by the integrator
    /// or the relaxation solver, only by explicit interaction calls.
    pub fixed: Vec<bool>,
    /// Static texture coordinates in [0,1]².
    pub uvs: Vec<Vec2>,
    /// Derived vertex normals, rebuilt every step.
    pub normals: Vec<Vec3>,
}

impl ParticleStore {
    /// Builds the store in its rest pose with the grid's default pins
    /// (the two top-row corners) applied.
    pub fn from_grid(grid: &ClothGrid) -> Self {
        let rest = grid.rest_positions();
        let n = rest.len();

        let mut store = Self {
            positions: rest.clone(),
            prev_positions: rest.clone(),
            accelerations: vec![Vec3::ZERO; n],
            rest_positions: rest,
            fixed: vec![false; n],
            uvs: grid.uvs(),
            normals: vec![Vec3::ZERO; n],
        };
        store.apply_default_pins(grid);
        store
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the store holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True when `index` is in range and the particle is pinned.
    #[inline]
    pub fn is_fixed(&self, index: usize) -> bool {
        self.fixed.get(index).copied().unwrap_or(false)
    }

    /// Accumulates a force (as acceleration) on one particle.
    ///
    /// Fixed particles absorb nothing: no acceleration is accumulated
    /// for them at all.
    #[inline]
    pub fn apply_force(&mut self, index: usize, force: Vec3) {
        if !self.fixed[index] {
            self.accelerations[index] += force;
        }
    }

    /// Clears all pins, then re-pins the grid's default corner set.
    pub fn apply_default_pins(&mut self, grid: &ClothGrid) {
        self.fixed.fill(false);
        for idx in grid.default_pins() {
            self.fixed[idx] = true;
        }
    }

    /// Restores the rest pose: positions and previous positions from
    /// the captured rest positions, accelerations cleared, and the
    /// default pin set reapplied (discarding runtime pin toggles).
    pub fn reset_to_rest(&mut self, grid: &ClothGrid) {
        self.positions.copy_from_slice(&self.rest_positions);
        self.prev_positions.copy_from_slice(&self.rest_positions);
        self.accelerations.fill(Vec3::ZERO);
        self.apply_default_pins(grid);
    }
}
