//! Cloth tuning parameters.
//!
//! Everything that shapes the motion without changing the topology:
//! damping, relaxation pass count, the two correction factors, the
//! warmup window, gravity, and the wind hook.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use drapa_types::{constants, DrapaError, DrapaResult};

/// Configuration for the cloth simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    /// Verlet velocity damping factor, in (0, 1].
    pub damping: f32,

    /// Number of constraint relaxation passes per step.
    pub constraint_iterations: u32,

    /// Correction factor once the warmup window has elapsed.
    pub correction_factor_stable: f32,

    /// Correction factor during the warmup window.
    pub correction_factor_warmup: f32,

    /// Frames over which gravity ramps in and the aggressive
    /// correction factor applies. Zero disables the warmup entirely.
    pub warmup_frames: u32,

    /// Gravity acceleration vector (m/s²).
    pub gravity: Vec3,

    /// Wind direction; normalized before use, ignored when degenerate.
    pub wind_direction: Vec3,

    /// Wind strength in multiples of gravity. Zero disables the hook.
    pub wind_strength: f32,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            damping: constants::DEFAULT_DAMPING,
            constraint_iterations: constants::DEFAULT_CONSTRAINT_ITERATIONS,
            correction_factor_stable: constants::CORRECTION_FACTOR_STABLE,
            correction_factor_warmup: constants::CORRECTION_FACTOR_WARMUP,
            warmup_frames: constants::WARMUP_FRAMES,
            gravity: Vec3::new(0.0, -constants::GRAVITY, 0.0),
            wind_direction: Vec3::ZERO,
            wind_strength: 0.0,
        }
    }
}

impl ClothConfig {
    /// A fast-but-sloppy config for debugging (fewer relaxation passes).
    pub fn debug() -> Self {
        Self {
            constraint_iterations: 2,
            ..Default::default()
        }
    }

    /// A stiffer, slower config (more relaxation passes).
    pub fn high_quality() -> Self {
        Self {
            constraint_iterations: 16,
            ..Default::default()
        }
    }

    /// Validates parameter ranges.
    pub fn validate(&self) -> DrapaResult<()> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(DrapaError::InvalidConfig(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if self.constraint_iterations < 1 {
            return Err(DrapaError::InvalidConfig(
                "constraint_iterations must be >= 1".into(),
            ));
        }
        for (name, factor) in [
            ("correction_factor_stable", self.correction_factor_stable),
            ("correction_factor_warmup", self.correction_factor_warmup),
        ] {
            if !(factor > 0.0 && factor <= 0.5) {
                return Err(DrapaError::InvalidConfig(format!(
                    "{name} must be in (0, 0.5], got {factor}"
                )));
            }
        }
        if self.wind_strength < 0.0 {
            return Err(DrapaError::InvalidConfig(format!(
                "wind_strength must be >= 0, got {}",
                self.wind_strength
            )));
        }
        if !self.gravity.is_finite() {
            return Err(DrapaError::InvalidConfig("gravity must be finite".into()));
        }
        Ok(())
    }
}
