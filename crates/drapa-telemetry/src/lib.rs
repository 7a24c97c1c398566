//! # drapa-telemetry
//!
//! Event bus for simulation telemetry. The headless runner emits
//! structured events (step timing, warmup completion, interactions)
//! that are fanned out to pluggable sinks — a `Vec` sink for tests,
//! a `tracing` sink for structured logs.
//!
//! The simulation core itself never logs; it returns per-step stats
//! and the runner decides what becomes an event.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
