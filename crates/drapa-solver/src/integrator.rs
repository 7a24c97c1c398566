//! Verlet-style position integration with damping and the warmup
//! gravity ramp.
//!
//! No explicit velocity is stored anywhere: velocity is implied by the
//! difference between current and previous positions. Fixed particles
//! are skipped entirely — no force accumulation, no position change.

use glam::Vec3;

use drapa_types::constants::GRAVITY;

use crate::state::ParticleStore;

/// Gravity scale for the given frame: a linear 0→1 ramp over the
/// warmup window, 1 at and after frame `warmup_frames`.
///
/// A freshly built grid snaps into shape during its first constraint
/// passes; ramping gravity in over the same window avoids stacking an
/// impulse shock on top of that settling.
#[inline]
pub fn gravity_scale(frame: u32, warmup_frames: u32) -> f32 {
    if frame < warmup_frames {
        frame as f32 / warmup_frames as f32
    } else {
        1.0
    }
}

/// Accumulates a uniform gravity acceleration on every free particle.
pub fn apply_gravity(store: &mut ParticleStore, gravity: Vec3) {
    for i in 0..store.len() {
        store.apply_force(i, gravity);
    }
}

/// Uniform wind hook: accumulates `normalize(direction) * 9.8 * strength`
/// on every free particle.
///
/// A zero strength or a degenerate direction makes this a no-op; the
/// hook exists for scenarios that want a constant field and is disabled
/// by default.
pub fn apply_wind(store: &mut ParticleStore, direction: Vec3, strength: f32) {
    if strength <= 0.0 {
        return;
    }
    let Some(dir) = direction.try_normalize() else {
        return;
    };
    let wind = dir * (GRAVITY * strength);
    for i in 0..store.len() {
        store.apply_force(i, wind);
    }
}

/// Advances every free particle by one Verlet step.
///
/// `next = pos + (pos - prev) * damping + accel * dt²`; the current
/// position becomes the new previous position, and the accumulated
/// acceleration is cleared — forces never persist across steps.
///
/// `dt` is in seconds and must be >= 0; the caller is responsible for
/// clamping pathologically large deltas (e.g. after a stall).
pub fn integrate(store: &mut ParticleStore, dt: f32, damping: f32) {
    debug_assert!(dt >= 0.0);
    let dt2 = dt * dt;

    for i in 0..store.len() {
        if store.fixed[i] {
            continue;
        }

        let pos = store.positions[i];
        let velocity = (pos - store.prev_positions[i]) * damping;

        store.positions[i] = pos + velocity + store.accelerations[i] * dt2;
        store.prev_positions[i] = pos;
        store.accelerations[i] = Vec3::ZERO;
    }
}
