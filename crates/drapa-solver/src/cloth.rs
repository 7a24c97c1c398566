//! The simulation facade: one `Cloth` owns the grid, the particle
//! store, and the spring set, and exposes the whole engine boundary —
//! construction, `step`, read accessors, and interaction calls.

use std::time::Instant;

use glam::{Vec2, Vec3};

use drapa_mesh::normals::compute_vertex_normals;
use drapa_mesh::ClothGrid;
use drapa_types::DrapaResult;

use crate::config::ClothConfig;
use crate::integrator;
use crate::interaction;
use crate::relaxation;
use crate::springs::{build_springs, Spring};
use crate::state::ParticleStore;

/// Diagnostics from one simulation step.
#[derive(Debug, Clone, Copy)]
pub struct StepStats {
    /// The frame index this step ran as (pre-increment).
    pub frame: u32,
    /// Gravity ramp scale applied this step (1.0 after warmup).
    pub gravity_scale: f32,
    /// Constraint correction factor used this step.
    pub correction_factor: f32,
    /// Largest single spring correction applied across all passes.
    pub max_correction: f32,
    /// Wall-clock time for the step (seconds).
    pub wall_time: f64,
}

/// A deformable cloth: particle grid, spring network, and integrator
/// state, stepped explicitly by the caller.
///
/// The cloth has no wall-clock dependency; time advances only through
/// the `dt` passed to [`Cloth::step`]. All mutation goes through
/// `step` and the interaction methods — the particle buffers are
/// exposed read-only.
pub struct Cloth {
    grid: ClothGrid,
    store: ParticleStore,
    springs: Vec<Spring>,
    indices: Vec<u32>,
    config: ClothConfig,
    frame: u32,
}

impl Cloth {
    /// Builds a cloth with the default configuration.
    pub fn new(width: usize, height: usize, spacing: f32) -> DrapaResult<Self> {
        Self::with_config(width, height, spacing, ClothConfig::default())
    }

    /// Builds a cloth with an explicit configuration.
    ///
    /// Fails fast on invalid grid parameters or configuration values;
    /// a constructed cloth never errors afterwards.
    pub fn with_config(
        width: usize,
        height: usize,
        spacing: f32,
        config: ClothConfig,
    ) -> DrapaResult<Self> {
        config.validate()?;
        let grid = ClothGrid::new(width, height, spacing)?;

        let mut store = ParticleStore::from_grid(&grid);
        let indices = grid.triangles();
        compute_vertex_normals(&store.positions, &indices, &mut store.normals);

        Ok(Self {
            springs: build_springs(&grid),
            grid,
            store,
            indices,
            config,
            frame: 0,
        })
    }

    /// Replaces the topology entirely: new grid, rest pose, spring
    /// set, and triangulation, with the default pins and a restarted
    /// warmup window. The configuration is kept.
    ///
    /// On failure the existing topology is left untouched.
    pub fn rebuild(&mut self, width: usize, height: usize, spacing: f32) -> DrapaResult<()> {
        let grid = ClothGrid::new(width, height, spacing)?;

        let mut store = ParticleStore::from_grid(&grid);
        let indices = grid.triangles();
        compute_vertex_normals(&store.positions, &indices, &mut store.normals);

        self.springs = build_springs(&grid);
        self.grid = grid;
        self.store = store;
        self.indices = indices;
        self.frame = 0;
        Ok(())
    }

    /// Advances the simulation exactly one step.
    ///
    /// `dt` is in seconds and must be >= 0; the caller clamps
    /// pathologically large deltas (e.g. after a stall). The step is a
    /// bounded, fixed-iteration computation: force accumulation, Verlet
    /// advance, `constraint_iterations` relaxation passes, normal
    /// recomputation, then the frame counter advances once.
    pub fn step(&mut self, dt: f32) -> StepStats {
        let start = Instant::now();
        let cfg = &self.config;

        let gravity_scale = integrator::gravity_scale(self.frame, cfg.warmup_frames);
        integrator::apply_gravity(&mut self.store, cfg.gravity * gravity_scale);
        integrator::apply_wind(&mut self.store, cfg.wind_direction, cfg.wind_strength);
        integrator::integrate(&mut self.store, dt, cfg.damping);

        let factor = relaxation::correction_factor(
            self.frame,
            cfg.warmup_frames,
            cfg.correction_factor_warmup,
            cfg.correction_factor_stable,
        );
        let mut max_correction = 0.0f32;
        for _ in 0..cfg.constraint_iterations {
            let pass_max = relaxation::relax_springs(&mut self.store, &self.springs, factor);
            max_correction = max_correction.max(pass_max);
        }

        compute_vertex_normals(&self.store.positions, &self.indices, &mut self.store.normals);

        let stats = StepStats {
            frame: self.frame,
            gravity_scale,
            correction_factor: factor,
            max_correction,
            wall_time: start.elapsed().as_secs_f64(),
        };
        self.frame += 1;
        stats
    }

    // ─── Interaction surface ──────────────────────────────────

    /// Teleports a particle; see [`interaction::teleport`].
    pub fn teleport(&mut self, index: usize, position: Vec3, sync_prev: bool) {
        interaction::teleport(&mut self.store, index, position, sync_prev);
    }

    /// Pins or frees a particle; see [`interaction::set_fixed`].
    pub fn set_fixed(&mut self, index: usize, fixed: bool) {
        interaction::set_fixed(&mut self.store, index, fixed);
    }

    /// Flips a particle's pin state. Out-of-range index is a no-op.
    pub fn toggle_fixed(&mut self, index: usize) {
        if index < self.store.len() {
            let fixed = self.store.fixed[index];
            interaction::set_fixed(&mut self.store, index, !fixed);
        }
    }

    /// Applies a localized radial impulse; returns the number of
    /// particles affected. See [`interaction::radial_impulse`].
    pub fn radial_impulse(
        &mut self,
        center: Vec3,
        direction: Vec3,
        strength: f32,
        radius: f32,
    ) -> u32 {
        interaction::radial_impulse(&mut self.store, center, direction, strength, radius)
    }

    /// Restores the rest pose and default corner pins, and restarts
    /// the warmup window (the frame counter returns to zero).
    pub fn reset(&mut self) {
        interaction::reset_to_rest(&mut self.store, &self.grid);
        compute_vertex_normals(&self.store.positions, &self.indices, &mut self.store.normals);
        self.frame = 0;
    }

    // ─── Read accessors ───────────────────────────────────────

    /// The logical grid this cloth was built from.
    #[inline]
    pub fn grid(&self) -> &ClothGrid {
        &self.grid
    }

    /// Grid width in particles.
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Grid height in particles.
    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Total particle count.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    /// Current particle positions.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.store.positions
    }

    /// Current vertex normals (recomputed each step).
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.store.normals
    }

    /// Static texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[Vec2] {
        &self.store.uvs
    }

    /// Pin flags.
    #[inline]
    pub fn fixed(&self) -> &[bool] {
        &self.store.fixed
    }

    /// The fixed triangulation, flat `[v0, v1, v2, ...]`.
    #[inline]
    pub fn triangle_indices(&self) -> &[u32] {
        &self.indices
    }

    /// The spring set, in relaxation sweep order.
    #[inline]
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Monotonic step counter (drives the warmup window).
    #[inline]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    /// Index of the top-left default anchor.
    #[inline]
    pub fn left_anchor(&self) -> usize {
        self.grid.left_anchor()
    }

    /// Index of the top-right default anchor.
    #[inline]
    pub fn right_anchor(&self) -> usize {
        self.grid.right_anchor()
    }
}
