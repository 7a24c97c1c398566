//! Direct manipulation of the particle store: teleport, pinning,
//! localized impulses, and reset to rest.
//!
//! Every operation takes effect immediately and synchronously; callers
//! invoke them between steps. An out-of-range index is a silent no-op,
//! not an error — callers that need diagnostics validate against the
//! grid dimensions themselves.

use glam::Vec3;

use drapa_mesh::ClothGrid;

use crate::state::ParticleStore;

/// Sets a particle's position to an explicit value.
///
/// With `sync_prev` the previous position is overwritten too, which
/// suppresses the implied-velocity kick a sudden jump would otherwise
/// cause — the mode used for drag-following. Works on fixed particles
/// as well; dragging a pinned anchor is the primary use.
pub fn teleport(store: &mut ParticleStore, index: usize, position: Vec3, sync_prev: bool) {
    if index >= store.len() {
        return;
    }
    store.positions[index] = position;
    if sync_prev {
        store.prev_positions[index] = position;
    }
}

/// Pins or frees a particle.
///
/// A newly pinned particle has its previous position synchronized to
/// its current position, freezing it exactly where it is instead of
/// letting residual implied velocity snap it elsewhere.
pub fn set_fixed(store: &mut ParticleStore, index: usize, fixed: bool) {
    if index >= store.len() {
        return;
    }
    if fixed && !store.fixed[index] {
        store.prev_positions[index] = store.positions[index];
    }
    store.fixed[index] = fixed;
}

/// Applies an instantaneous acceleration to every free particle within
/// `radius` of `center`, directed along `direction`.
///
/// The magnitude is `strength` scaled by a linear falloff: 1 at the
/// center, 0 at and beyond the radius, monotonically decreasing in
/// between. Fixed particles are unaffected regardless of distance. A
/// non-positive radius or a degenerate direction is a no-op.
///
/// Returns the number of particles that received the impulse.
pub fn radial_impulse(
    store: &mut ParticleStore,
    center: Vec3,
    direction: Vec3,
    strength: f32,
    radius: f32,
) -> u32 {
    if radius <= 0.0 {
        return 0;
    }
    let Some(dir) = direction.try_normalize() else {
        return 0;
    };

    let mut affected = 0;
    for i in 0..store.len() {
        if store.fixed[i] {
            continue;
        }
        let dist = store.positions[i].distance(center);
        if dist < radius {
            let falloff = 1.0 - dist / radius;
            store.apply_force(i, dir * (strength * falloff));
            affected += 1;
        }
    }
    affected
}

/// Restores the rest pose and the default corner pins.
///
/// Positions and previous positions both return to the captured rest
/// positions (zero implied velocity), accumulated accelerations are
/// cleared, and any runtime pin toggles are discarded.
pub fn reset_to_rest(store: &mut ParticleStore, grid: &ClothGrid) {
    store.reset_to_rest(grid);
}
