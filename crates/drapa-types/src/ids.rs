//! Strongly-typed identifiers for simulation entities.
//!
//! Springs reference particles through this newtype rather than raw
//! integers, so a spring endpoint cannot be confused with a triangle
//! index or a loop counter.

use serde::{Deserialize, Serialize};

/// Index into the particle store's channel arrays.
///
/// The particle index space is fixed at topology-build time; ids are
/// never reused or invalidated while the owning `Cloth` lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<usize> for ParticleId {
    fn from(val: usize) -> Self {
        Self(val as u32)
    }
}
