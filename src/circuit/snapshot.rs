//! Snapshot serialization of the circuit graph.
//!
//! A [`CircuitSnapshot`] is the flat, serde-friendly image of a circuit:
//! one record per component and per wire. It is what the persistence layer
//! stores and what the synchronization layer ships between peers over the
//! socket relay.
//!
//! Loading re-validates every structural invariant, since a snapshot may
//! come from an untrusted peer: dangling endpoint references, self-loops,
//! out-of-range slots, and doubly-occupied input slots are all rejected.
//! Derived states in a snapshot are advisory; callers re-run propagation
//! after loading rather than trusting them.

use serde::{Deserialize, Serialize};

use super::graph::Circuit;
use super::types::{ComponentId, Point, Signal, WireId};
use crate::components::{Component, ComponentKind};
use crate::error::{GatesimError, Result};

/// Serialized image of one component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentSnapshot {
    pub id: ComponentId,
    pub kind: ComponentKind,
    pub position: Point,
    pub state: Signal,
}

/// Serialized image of one wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSnapshot {
    pub id: WireId,
    pub source: ComponentId,
    pub destination: ComponentId,
    pub slot: usize,
}

/// A complete serialized circuit: the unit of persistence and peer sync.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CircuitSnapshot {
    pub components: Vec<ComponentSnapshot>,
    pub wires: Vec<WireSnapshot>,
}

impl CircuitSnapshot {
    /// Encode the snapshot as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| GatesimError::SnapshotEncode { source })
    }

    /// Decode a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| GatesimError::SnapshotDecode { source })
    }
}

impl Circuit {
    /// Capture the current graph as a snapshot.
    pub fn snapshot(&self) -> CircuitSnapshot {
        CircuitSnapshot {
            components: self
                .components()
                .map(|c| ComponentSnapshot {
                    id: c.id,
                    kind: c.kind,
                    position: c.position,
                    state: c.state,
                })
                .collect(),
            wires: self
                .wires()
                .map(|w| WireSnapshot {
                    id: w.id,
                    source: w.source,
                    destination: w.destination,
                    slot: w.slot,
                })
                .collect(),
        }
    }

    /// Rebuild a circuit from a snapshot, re-validating every invariant.
    ///
    /// Component and wire ids are preserved so wires in concurrent edits
    /// keep referring to the same endpoints. Derived states are loaded
    /// as-is; run a propagation pass afterwards to recompute them. An INPUT
    /// terminal with no recorded value starts `Low`, like a freshly placed
    /// one.
    pub fn from_snapshot(snapshot: &CircuitSnapshot) -> Result<Self> {
        let mut circuit = Circuit::new();

        for comp in &snapshot.components {
            if circuit.component(comp.id).is_some() {
                return Err(GatesimError::invalid_snapshot(format!(
                    "duplicate component id {}",
                    comp.id
                )));
            }
            let state = match comp.kind {
                ComponentKind::Input if !comp.state.is_known() => Signal::Low,
                _ => comp.state,
            };
            circuit.restore_component(Component {
                id: comp.id,
                kind: comp.kind,
                position: comp.position,
                state,
            });
        }

        for wire in &snapshot.wires {
            let kind_of = |id: ComponentId| -> Result<ComponentKind> {
                circuit.component(id).map(|c| c.kind).ok_or_else(|| {
                    GatesimError::invalid_snapshot(format!(
                        "wire {} references missing component {}",
                        wire.id, id
                    ))
                })
            };
            let source_kind = kind_of(wire.source)?;
            let dest_kind = kind_of(wire.destination)?;

            if wire.source == wire.destination {
                return Err(GatesimError::invalid_snapshot(format!(
                    "wire {} connects component {} to itself",
                    wire.id, wire.source
                )));
            }
            if wire.slot >= dest_kind.input_slots() {
                return Err(GatesimError::invalid_snapshot(format!(
                    "wire {} targets slot {} of {} component {}",
                    wire.id, wire.slot, dest_kind, wire.destination
                )));
            }
            if !source_kind.has_output() {
                return Err(GatesimError::invalid_snapshot(format!(
                    "wire {} originates at {} component {}, which has no output",
                    wire.id, source_kind, wire.source
                )));
            }
            if circuit.wire_at(wire.destination, wire.slot).is_some() {
                return Err(GatesimError::invalid_snapshot(format!(
                    "input slot {} of component {} is wired twice",
                    wire.slot, wire.destination
                )));
            }
            if !circuit.restore_wire(wire.id, wire.source, wire.destination, wire.slot) {
                return Err(GatesimError::invalid_snapshot(format!(
                    "duplicate wire id {}",
                    wire.id
                )));
            }
        }

        Ok(circuit)
    }
}
