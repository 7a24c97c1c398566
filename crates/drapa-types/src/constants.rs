//! Physical constants and simulation defaults.

/// Gravitational acceleration magnitude (m/s²).
pub const GRAVITY: f32 = 9.8;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Verlet velocity damping factor applied each step (< 1).
pub const DEFAULT_DAMPING: f32 = 0.99;

/// Default number of constraint relaxation passes per timestep.
pub const DEFAULT_CONSTRAINT_ITERATIONS: u32 = 8;

/// Constraint correction factor once the warmup window has elapsed.
pub const CORRECTION_FACTOR_STABLE: f32 = 0.22;

/// More aggressive correction factor used during the warmup window,
/// so a freshly built grid settles quickly.
pub const CORRECTION_FACTOR_WARMUP: f32 = 0.38;

/// Number of initial frames over which gravity ramps linearly from
/// zero to full strength (and constraint correction stays aggressive).
pub const WARMUP_FRAMES: u32 = 60;

/// Springs whose endpoints are closer than this are skipped for the
/// current relaxation pass (avoids division by ~0).
pub const SPRING_DISTANCE_EPSILON: f32 = 1.0e-8;

/// Squared-length threshold below which a normal is considered
/// degenerate and replaced by the +Z fallback.
pub const DEGENERATE_NORMAL_EPSILON: f32 = 1.0e-12;
