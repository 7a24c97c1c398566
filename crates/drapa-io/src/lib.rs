//! # drapa-io
//!
//! The serialization boundary of the drapa engine:
//!
//! - [`Scenario`] — the TOML contract a headless run is described by
//!   (grid, run length, cloth config, scheduled impulses, export).
//! - [`obj`] — Wavefront OBJ/MTL export, a thin textual layer over the
//!   cloth's read accessors.
//! - [`snapshot::StateSnapshot`] — compact binary state capture for
//!   offline inspection.
//!
//! Nothing here touches the simulation loop; everything is layered on
//! top of `drapa-solver`'s public surface.

pub mod obj;
pub mod scenario;
pub mod snapshot;

pub use scenario::Scenario;
pub use snapshot::StateSnapshot;
