//! # drapa-solver
//!
//! The cloth physics core: particle state, spring topology, Verlet
//! integration, iterative constraint relaxation, and the direct
//! manipulation surface.
//!
//! ## Key Types
//!
//! - [`Cloth`] — the simulation facade: construction, `step`, read
//!   accessors for a renderer, and interaction entry points.
//! - [`ParticleStore`] — SoA channel buffers for all per-particle data.
//! - [`ClothConfig`] — serde/TOML-round-trippable tuning parameters.
//! - [`springs::Spring`] — index-pair relation with an immutable rest
//!   length; built per category (structural, shear, bend).
//!
//! One `step` is a fixed in-order sequence: force accumulation (gravity
//! ramp + wind hook), Verlet advance, N relaxation passes, normal
//! recomputation. Single-threaded, no internal locking; callers
//! serialize interaction calls around steps.

pub mod cloth;
pub mod config;
pub mod integrator;
pub mod interaction;
pub mod relaxation;
pub mod springs;
pub mod state;

pub use cloth::{Cloth, StepStats};
pub use config::ClothConfig;
pub use state::ParticleStore;
