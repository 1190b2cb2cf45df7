//! Main simulator interface.

use tracing::debug;

use crate::circuit::{
    resolve_port, validate_connection, Circuit, CircuitSnapshot, ComponentId, Point, Port, Signal,
    Wire, WireId,
};
use crate::components::{Component, ComponentKind};
use crate::error::Result;
use crate::DEFAULT_HIT_RADIUS;

use super::propagate;

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Radius of a port's hit region, in canvas pixels.
    pub hit_radius: f32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            hit_radius: DEFAULT_HIT_RADIUS,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the port hit-region radius.
    ///
    /// Larger values make ports easier to pick on touch devices; keep the
    /// radius below half the minimum component spacing so adjacent hit
    /// regions stay disjoint.
    pub fn with_hit_radius(mut self, hit_radius: f32) -> Self {
        self.hit_radius = hit_radius;
        self
    }
}

/// The live circuit simulator: the single writer of a [`Circuit`].
///
/// All mutations from the surrounding application go through the five
/// operations here; each one re-runs the propagation pass before returning,
/// so the states read back through [`components`](Simulator::components)
/// are always consistent with the current inputs and wiring.
#[derive(Debug, Default)]
pub struct Simulator {
    /// The circuit being simulated
    circuit: Circuit,
    /// Interaction configuration
    config: SimulatorConfig,
}

impl Simulator {
    /// Create an empty simulator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty simulator with custom configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self {
            circuit: Circuit::new(),
            config,
        }
    }

    /// Restore a simulator from a snapshot.
    ///
    /// Derived states in the snapshot are discarded: the graph is
    /// re-validated, loaded, and re-propagated from its INPUT states.
    pub fn from_snapshot(snapshot: &CircuitSnapshot) -> Result<Self> {
        let mut circuit = Circuit::from_snapshot(snapshot)?;
        propagate(&mut circuit);
        Ok(Self {
            circuit,
            config: SimulatorConfig::default(),
        })
    }

    /// Place a new component and recompute states.
    ///
    /// INPUT terminals start driving `Low`; every other kind starts
    /// `Unknown` until wired.
    pub fn add_component(&mut self, kind: ComponentKind, position: Point) -> ComponentId {
        let id = self.circuit.insert_component(kind, position);
        debug!("Placed {} {} at {}", kind, id, position);
        propagate(&mut self.circuit);
        id
    }

    /// Remove a component and every wire touching it, then recompute
    /// states. Silent no-op if `id` is unknown.
    pub fn remove_component(&mut self, id: ComponentId) {
        if self.circuit.remove_component(id) {
            debug!("Removed component {}", id);
            propagate(&mut self.circuit);
        }
    }

    /// Wire two ports together, replacing any wire already terminating at
    /// the destination slot.
    ///
    /// The ports may be given in either order; direction is normalized so
    /// the output side becomes the source. On failure the circuit is left
    /// untouched and the typed error is the only observable effect.
    pub fn connect(&mut self, a: Port, b: Port) -> Result<WireId> {
        let spec = validate_connection(&self.circuit, a, b)?;
        let id = self.circuit.attach_wire(spec);
        debug!(
            "Wired {} -> {} slot {}{}",
            spec.source,
            spec.destination,
            spec.slot,
            if spec.replaces.is_some() {
                " (rewired)"
            } else {
                ""
            }
        );
        propagate(&mut self.circuit);
        Ok(id)
    }

    /// Remove a single wire and recompute states. Silent no-op if `id` is
    /// unknown.
    pub fn disconnect(&mut self, id: WireId) {
        if self.circuit.detach_wire(id) {
            debug!("Removed wire {}", id);
            propagate(&mut self.circuit);
        }
    }

    /// Flip an INPUT terminal between `Low` and `High` and recompute
    /// states.
    ///
    /// Returns `false` without touching the circuit if `id` is unknown or
    /// does not refer to an INPUT terminal. Toggling is the only way any
    /// caller can set a state directly.
    pub fn toggle_input(&mut self, id: ComponentId) -> bool {
        let toggled = match self.circuit.component(id) {
            Some(c) if c.kind == ComponentKind::Input => c.state.toggled(),
            _ => return false,
        };
        self.circuit.set_state(id, toggled);
        debug!("Toggled {} to {}", id, toggled);
        propagate(&mut self.circuit);
        true
    }

    /// Hit-test a point against every port, using the configured radius.
    pub fn resolve_port(&self, point: Point) -> Option<Port> {
        resolve_port(&self.circuit, point, self.config.hit_radius)
    }

    /// Iterate the current components (id, kind, position, state).
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.circuit.components()
    }

    /// Iterate the current wires (endpoints and slot).
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.circuit.wires()
    }

    /// Read one component's current state.
    pub fn state(&self, id: ComponentId) -> Option<Signal> {
        self.circuit.component(id).map(|c| c.state)
    }

    /// Capture the current graph as a snapshot for persistence or peer
    /// sync.
    pub fn snapshot(&self) -> CircuitSnapshot {
        self.circuit.snapshot()
    }

    /// Replace the whole graph with an externally-sourced snapshot and run
    /// one propagation pass.
    ///
    /// This is the bulk equivalent of removing everything and replaying
    /// the remote peer's components and wires; callers serialize it against
    /// local mutations under the same single-writer discipline. On failure
    /// the current graph is kept.
    pub fn apply_snapshot(&mut self, snapshot: &CircuitSnapshot) -> Result<()> {
        let mut circuit = Circuit::from_snapshot(snapshot)?;
        propagate(&mut circuit);
        debug!(
            "Applied snapshot: {} components, {} wires",
            circuit.component_count(),
            circuit.wire_count()
        );
        self.circuit = circuit;
        Ok(())
    }

    /// Get a reference to the circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }
}
