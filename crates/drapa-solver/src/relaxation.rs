//! Gauss–Seidel constraint relaxation over the spring set.
//!
//! Each pass sweeps all springs in insertion order and applies a
//! partial, proportional correction toward every spring's rest length.
//! Passes are sequential: each spring sees the corrections already
//! applied earlier in the same pass. Convergence is approximate by
//! design; a fixed number of passes per step is enough for a visually
//! plausible cloth.

use drapa_types::constants::SPRING_DISTANCE_EPSILON;

use crate::springs::Spring;
use crate::state::ParticleStore;

/// Correction factor for the given frame: aggressive during the warmup
/// window (fast initial settling), smaller afterwards (no oscillation
/// once the warmup shock has passed).
#[inline]
pub fn correction_factor(
    frame: u32,
    warmup_frames: u32,
    warmup_factor: f32,
    stable_factor: f32,
) -> f32 {
    if frame < warmup_frames {
        warmup_factor
    } else {
        stable_factor
    }
}

/// One relaxation pass over all springs.
///
/// Per spring: the fractional violation `(dist - rest) / dist` scaled
/// by `factor` is applied along the connecting vector — added to a free
/// first endpoint, subtracted from a free second endpoint. When one
/// endpoint is fixed the free one still moves by the same single-sided
/// correction. Near-coincident endpoints (distance below epsilon) are
/// skipped for the pass instead of dividing by ~0.
///
/// Returns the largest single correction magnitude applied, a cheap
/// convergence signal for telemetry.
pub fn relax_springs(store: &mut ParticleStore, springs: &[Spring], factor: f32) -> f32 {
    let mut max_correction = 0.0f32;

    for spring in springs {
        let (i, j) = (spring.a.index(), spring.b.index());

        let delta = store.positions[j] - store.positions[i];
        let dist = delta.length();
        if dist < SPRING_DISTANCE_EPSILON {
            continue;
        }

        let diff = (dist - spring.rest_length) / dist;
        let correction = delta * (factor * diff);

        let mut applied = false;
        if !store.fixed[i] {
            store.positions[i] += correction;
            applied = true;
        }
        if !store.fixed[j] {
            store.positions[j] -= correction;
            applied = true;
        }
        if applied {
            max_correction = max_correction.max(correction.length());
        }
    }

    max_correction
}
