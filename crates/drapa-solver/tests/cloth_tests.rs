//! Integration tests for the `Cloth` facade: full-step behavior,
//! warmup semantics, interaction calls, and determinism.

use glam::Vec3;

use drapa_solver::{Cloth, ClothConfig};

/// A config with gravity and warmup disabled, for tests that need the
/// cloth to sit perfectly still unless poked.
fn still_config() -> ClothConfig {
    ClothConfig {
        gravity: Vec3::ZERO,
        warmup_frames: 0,
        ..Default::default()
    }
}

// ─── Construction Tests ───────────────────────────────────────

#[test]
fn construction_rejects_bad_parameters() {
    assert!(Cloth::new(0, 4, 1.0).is_err());
    assert!(Cloth::new(4, 0, 1.0).is_err());
    assert!(Cloth::new(4, 4, -0.5).is_err());

    let bad_config = ClothConfig {
        damping: 2.0,
        ..Default::default()
    };
    assert!(Cloth::with_config(4, 4, 1.0, bad_config).is_err());
}

#[test]
fn fresh_cloth_exposes_consistent_views() {
    let cloth = Cloth::new(20, 20, 0.2).unwrap();
    assert_eq!(cloth.width(), 20);
    assert_eq!(cloth.height(), 20);
    assert_eq!(cloth.particle_count(), 400);
    assert_eq!(cloth.positions().len(), 400);
    assert_eq!(cloth.normals().len(), 400);
    assert_eq!(cloth.uvs().len(), 400);
    assert_eq!(cloth.fixed().len(), 400);
    assert_eq!(cloth.triangle_indices().len(), 19 * 19 * 2 * 3);
    assert_eq!(cloth.frame(), 0);
}

#[test]
fn fresh_cloth_has_normals_before_first_step() {
    let cloth = Cloth::new(4, 4, 1.0).unwrap();
    assert!(cloth.normals().iter().all(|n| n.z > 0.99));
}

// ─── The Concrete 2x2 Scenario ────────────────────────────────

#[test]
fn two_by_two_rest_scenario() {
    let mut cloth = Cloth::new(2, 2, 1.0).unwrap();

    assert_eq!(cloth.positions()[0], Vec3::new(-0.5, 0.5, 0.0));
    assert_eq!(cloth.positions()[1], Vec3::new(0.5, 0.5, 0.0));
    assert_eq!(cloth.positions()[2], Vec3::new(-0.5, -0.5, 0.0));
    assert_eq!(cloth.positions()[3], Vec3::new(0.5, -0.5, 0.0));

    // Top corners pinned by default.
    assert_eq!(cloth.fixed(), &[true, true, false, false]);

    // Zero dt plus a rest-length-exact pose: nothing may move.
    let before = cloth.positions().to_vec();
    cloth.step(0.0);
    assert_eq!(cloth.positions(), &before[..]);

    // Both triangles share one winding; every normal agrees.
    for n in cloth.normals() {
        assert!((*n - Vec3::Z).length() < 1e-6, "normal drifted: {n:?}");
    }
}

// ─── Fixed-Particle Invariance ────────────────────────────────

#[test]
fn pinned_corners_never_move() {
    let mut cloth = Cloth::new(8, 8, 0.25).unwrap();
    let left = cloth.left_anchor();
    let right = cloth.right_anchor();
    let left_pos = cloth.positions()[left];
    let right_pos = cloth.positions()[right];

    // Irregular deltas, including zero and a large spike.
    let deltas = [1.0 / 60.0, 0.0, 1.0 / 30.0, 0.004, 0.1];
    for i in 0..200 {
        cloth.step(deltas[i % deltas.len()]);
    }

    // Bit-for-bit: the integrator and solver never touch pins.
    assert_eq!(cloth.positions()[left], left_pos);
    assert_eq!(cloth.positions()[right], right_pos);
}

#[test]
fn runtime_pinned_particle_holds_under_steps() {
    let mut cloth = Cloth::new(6, 6, 0.5).unwrap();
    let mid = cloth.grid().index(3, 3);

    for _ in 0..10 {
        cloth.step(1.0 / 60.0);
    }
    cloth.set_fixed(mid, true);
    let held = cloth.positions()[mid];

    for _ in 0..50 {
        cloth.step(1.0 / 60.0);
    }
    assert_eq!(cloth.positions()[mid], held);
}

// ─── Warmup Semantics ─────────────────────────────────────────

#[test]
fn warmup_ramp_is_exact() {
    let config = ClothConfig {
        warmup_frames: 30,
        ..Default::default()
    };
    let mut cloth = Cloth::with_config(4, 4, 1.0, config).unwrap();

    for f in 0..30 {
        let stats = cloth.step(0.0);
        assert_eq!(stats.frame, f);
        assert_eq!(stats.gravity_scale, f as f32 / 30.0);
        assert_eq!(stats.correction_factor, 0.38);
    }
    for _ in 0..5 {
        let stats = cloth.step(0.0);
        assert_eq!(stats.gravity_scale, 1.0);
        assert_eq!(stats.correction_factor, 0.22);
    }
}

#[test]
fn frame_counter_increments_once_per_step() {
    let mut cloth = Cloth::new(3, 3, 1.0).unwrap();
    for expected in 0..10 {
        assert_eq!(cloth.frame(), expected);
        cloth.step(1.0 / 60.0);
    }
}

// ─── Motion Under Gravity ─────────────────────────────────────

#[test]
fn free_cloth_droops_under_gravity() {
    let mut cloth = Cloth::new(10, 10, 0.2).unwrap();
    let initial_centroid_y: f32 =
        cloth.positions().iter().map(|p| p.y).sum::<f32>() / cloth.particle_count() as f32;

    for _ in 0..120 {
        cloth.step(1.0 / 60.0);
    }

    let final_centroid_y: f32 =
        cloth.positions().iter().map(|p| p.y).sum::<f32>() / cloth.particle_count() as f32;
    assert!(
        final_centroid_y < initial_centroid_y - 1e-3,
        "cloth should droop: {final_centroid_y} vs {initial_centroid_y}"
    );
}

#[test]
fn springs_keep_the_sheet_coherent() {
    // After plenty of settling, no structural spring should be
    // stretched beyond twice its rest length.
    let mut cloth = Cloth::new(8, 8, 0.25).unwrap();
    for _ in 0..300 {
        cloth.step(1.0 / 60.0);
    }
    for s in cloth.springs() {
        let dist = cloth.positions()[s.a.index()].distance(cloth.positions()[s.b.index()]);
        assert!(
            dist < s.rest_length * 2.0,
            "spring {s:?} stretched to {dist}"
        );
    }
}

// ─── Teleport Semantics ───────────────────────────────────────

#[test]
fn teleport_with_sync_has_no_implied_velocity() {
    // A lone free particle with no springs and no gravity isolates the
    // implied-velocity behavior: after a synced teleport the next step
    // must not move it at all.
    let mut cloth = Cloth::with_config(1, 1, 1.0, still_config()).unwrap();
    cloth.set_fixed(0, false);

    let target = Vec3::new(3.0, 1.0, 0.5);
    cloth.teleport(0, target, true);
    cloth.step(1.0 / 60.0);

    assert_eq!(cloth.positions()[0], target);
}

#[test]
fn teleport_without_sync_kicks() {
    let mut cloth = Cloth::with_config(1, 1, 1.0, still_config()).unwrap();
    cloth.set_fixed(0, false);

    let target = Vec3::new(1.0, 0.0, 0.0);
    cloth.teleport(0, target, false);
    cloth.step(1.0 / 60.0);

    // prev stayed at the old position, so the jump implies velocity.
    assert!(cloth.positions()[0].x > target.x);
}

#[test]
fn teleport_out_of_range_index_is_ignored() {
    let mut cloth = Cloth::new(3, 3, 1.0).unwrap();
    let before = cloth.positions().to_vec();
    cloth.teleport(10_000, Vec3::ONE, true);
    assert_eq!(cloth.positions(), &before[..]);
}

// ─── Impulse Semantics ────────────────────────────────────────

#[test]
fn impulse_reports_affected_count() {
    let mut cloth = Cloth::new(5, 5, 1.0).unwrap();
    let center = cloth.positions()[cloth.grid().index(2, 2)];
    let affected = cloth.radial_impulse(center, Vec3::Z, 5.0, 0.5);
    assert_eq!(affected, 1);

    let affected_all = cloth.radial_impulse(center, Vec3::Z, 5.0, 100.0);
    // Everything but the two pinned corners.
    assert_eq!(affected_all, 25 - 2);
}

#[test]
fn impulse_moves_only_particles_in_range() {
    let mut cloth = Cloth::with_config(5, 5, 1.0, still_config()).unwrap();
    let hit = cloth.grid().index(2, 2);
    let far = cloth.grid().index(0, 4);
    let far_before = cloth.positions()[far];

    let center = cloth.positions()[hit];
    cloth.radial_impulse(center, Vec3::Z, 50.0, 0.5);
    cloth.step(1.0 / 60.0);

    assert!(cloth.positions()[hit].z > 0.0, "struck particle should move");
    // The far particle felt no impulse; only spring corrections could
    // move it, and the struck particle is 2+ links away for one step.
    assert!((cloth.positions()[far] - far_before).length() < 1e-4);
}

// ─── Reset Semantics ──────────────────────────────────────────

#[test]
fn reset_restores_rest_pose_and_default_pins() {
    let mut cloth = Cloth::new(6, 6, 0.5).unwrap();
    let rest = cloth.positions().to_vec();

    for _ in 0..90 {
        cloth.step(1.0 / 60.0);
    }
    cloth.toggle_fixed(cloth.left_anchor()); // unpin a corner
    cloth.set_fixed(17, true); // pin something else
    cloth.radial_impulse(Vec3::ZERO, Vec3::Z, 20.0, 2.0);

    cloth.reset();

    assert_eq!(cloth.positions(), &rest[..]);
    assert_eq!(cloth.frame(), 0);
    let fixed = cloth.fixed();
    for i in 0..cloth.particle_count() {
        let expected = i == cloth.left_anchor() || i == cloth.right_anchor();
        assert_eq!(fixed[i], expected, "pin state wrong at {i}");
    }
}

#[test]
fn reset_is_idempotent() {
    let mut cloth = Cloth::new(5, 5, 0.5).unwrap();
    for _ in 0..40 {
        cloth.step(1.0 / 60.0);
    }

    cloth.reset();
    let once_pos = cloth.positions().to_vec();
    let once_fixed = cloth.fixed().to_vec();

    cloth.reset();
    assert_eq!(cloth.positions(), &once_pos[..]);
    assert_eq!(cloth.fixed(), &once_fixed[..]);
}

#[test]
fn reset_restarts_warmup() {
    let mut cloth = Cloth::new(4, 4, 1.0).unwrap();
    for _ in 0..100 {
        cloth.step(1.0 / 60.0);
    }
    cloth.reset();
    let stats = cloth.step(1.0 / 60.0);
    assert_eq!(stats.frame, 0);
    assert_eq!(stats.gravity_scale, 0.0);
    assert_eq!(stats.correction_factor, 0.38);
}

// ─── Rebuild Semantics ────────────────────────────────────────

#[test]
fn rebuild_replaces_topology_and_restarts_warmup() {
    let mut cloth = Cloth::new(4, 4, 1.0).unwrap();
    for _ in 0..80 {
        cloth.step(1.0 / 60.0);
    }

    cloth.rebuild(6, 3, 0.5).unwrap();

    assert_eq!(cloth.width(), 6);
    assert_eq!(cloth.height(), 3);
    assert_eq!(cloth.particle_count(), 18);
    assert_eq!(cloth.frame(), 0);
    assert_eq!(cloth.positions(), &cloth.grid().rest_positions()[..]);
    assert!(cloth.fixed()[cloth.left_anchor()]);
    assert!(cloth.fixed()[cloth.right_anchor()]);
}

#[test]
fn failed_rebuild_keeps_old_topology() {
    let mut cloth = Cloth::new(4, 4, 1.0).unwrap();
    assert!(cloth.rebuild(0, 3, 1.0).is_err());
    assert_eq!(cloth.width(), 4);
    assert_eq!(cloth.particle_count(), 16);
}

// ─── Determinism ──────────────────────────────────────────────

#[test]
fn identical_runs_are_bitwise_identical() {
    let run = || {
        let mut cloth = Cloth::new(12, 9, 0.2).unwrap();
        for f in 0..150 {
            if f == 40 {
                cloth.radial_impulse(Vec3::ZERO, Vec3::new(0.3, 0.1, 1.0), 6.0, 0.6);
            }
            if f == 80 {
                cloth.toggle_fixed(cloth.right_anchor());
            }
            cloth.step(1.0 / 60.0);
        }
        cloth.positions().to_vec()
    };

    assert_eq!(run(), run());
}
