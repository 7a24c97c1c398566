//! State snapshot serialization for offline inspection.
//!
//! Snapshots capture the renderable simulation state at a point in
//! time in a compact binary form (`bincode`). They are a read-only
//! artifact: the inspector prints statistics from them, nothing feeds
//! them back into a running cloth.

use serde::{Deserialize, Serialize};

use drapa_solver::Cloth;
use drapa_types::{DrapaError, DrapaResult};

/// A captured simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Frame counter when the snapshot was taken.
    pub frame: u32,
    /// Accumulated simulation time (seconds).
    pub sim_time: f64,
    /// Number of particles.
    pub particle_count: usize,
    /// Positions, flat `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Pin flags, parallel to the particle index space.
    pub fixed: Vec<bool>,
}

impl StateSnapshot {
    /// Captures the cloth's current state.
    pub fn capture(cloth: &Cloth, sim_time: f64) -> Self {
        let mut positions = Vec::with_capacity(cloth.particle_count() * 3);
        for p in cloth.positions() {
            positions.push(p.x);
            positions.push(p.y);
            positions.push(p.z);
        }
        Self {
            frame: cloth.frame(),
            sim_time,
            particle_count: cloth.particle_count(),
            positions,
            fixed: cloth.fixed().to_vec(),
        }
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> DrapaResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| DrapaError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> DrapaResult<Self> {
        bincode::deserialize(data).map_err(|e| DrapaError::Serialization(e.to_string()))
    }

    /// Number of pinned particles.
    pub fn pinned_count(&self) -> usize {
        self.fixed.iter().filter(|f| **f).count()
    }

    /// Minimum and maximum Y coordinate across all particles, or
    /// `None` for an empty snapshot.
    pub fn y_range(&self) -> Option<(f32, f32)> {
        if self.positions.len() < 3 {
            return None;
        }
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for p in self.positions.chunks_exact(3) {
            min = min.min(p[1]);
            max = max.max(p[1]);
        }
        Some((min, max))
    }
}
