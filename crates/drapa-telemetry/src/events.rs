//! Simulation event types.
//!
//! Lightweight value types emitted by the runner around each step.
//! They carry just enough data to be useful for monitoring a headless
//! run without dragging the particle buffers along.

use serde::{Deserialize, Serialize};

/// A simulation event tagged with the frame it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame index (0-indexed step counter).
    pub frame: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// A step is about to run.
    StepBegin {
        /// Accumulated simulation time at the start of the step (seconds).
        sim_time: f64,
    },

    /// A step finished.
    StepEnd {
        /// Wall-clock time for the step (seconds).
        wall_time: f64,
        /// Largest single spring correction applied during the step.
        max_correction: f32,
    },

    /// The warmup window elapsed: gravity is at full strength and the
    /// solver switched to its stable correction factor.
    WarmupComplete,

    /// A radial impulse was applied between steps.
    ImpulseApplied {
        /// Number of particles that received the impulse.
        affected: u32,
    },

    /// The cloth was reset to its rest pose.
    ClothReset,

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// Free-form payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u32, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
