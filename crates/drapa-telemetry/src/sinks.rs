//! Pluggable event sinks.
//!
//! Sinks consume events drained from the bus. The two built-ins cover
//! testing (`VecSink`) and structured logging (`TracingSink`); custom
//! outputs implement [`EventSink`].

use crate::events::SimulationEvent;

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called once when the run ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A sink that collects events into a `Vec` for tests and inspection.
pub struct VecSink {
    /// Collected events, in arrival order.
    pub events: Vec<SimulationEvent>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events through the `tracing` crate.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        tracing::debug!(
            frame = event.frame,
            event = ?event.kind,
            "simulation_event"
        );
    }

    fn finalize(&mut self) {
        tracing::debug!("telemetry sink finalized");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
