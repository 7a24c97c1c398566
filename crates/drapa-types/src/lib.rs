//! # drapa-types
//!
//! Shared types, identifiers, error types, and simulation constants
//! for the drapa cloth simulation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other drapa crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{DrapaError, DrapaResult};
pub use ids::ParticleId;
