//! # drapa-mesh
//!
//! Immutable grid topology for the cloth engine: validated dimensions,
//! row-major index mapping, rest-pose layout, UV coordinates, and the
//! fixed triangulation — plus vertex normal recomputation from current
//! particle positions.
//!
//! ## Key Types
//!
//! - [`ClothGrid`] — logical width × height × spacing with the index
//!   mapping and procedural rest pose / UV / triangulation builders.
//! - [`normals::compute_vertex_normals`] — per-step derived geometry.

pub mod grid;
pub mod normals;

pub use grid::ClothGrid;
