//! Circuit graph structure.

use std::collections::BTreeMap;

use super::types::{ComponentId, Point, Signal, WireId};
use crate::components::{Component, ComponentKind, MAX_INPUT_SLOTS};

/// A wire carrying a signal from one component's output to another
/// component's input slot.
///
/// Direction is canonical: `source` always names the output side. The
/// circuit guarantees that at most one wire terminates at a given
/// `(destination, slot)` pair and that `source != destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wire {
    pub id: WireId,
    pub source: ComponentId,
    pub destination: ComponentId,
    pub slot: usize,
}

/// A validated wire insertion, produced by
/// [`validate_connection`](super::validate_connection).
///
/// `replaces` names the wire currently occupying the destination slot, if
/// any; attaching the spec displaces it so the fan-in invariant holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireSpec {
    pub source: ComponentId,
    pub destination: ComponentId,
    pub slot: usize,
    pub replaces: Option<WireId>,
}

/// The authoritative circuit graph: all components and wires.
///
/// The circuit is the sole owner of both collections. Structural invariants
/// (fan-in ≤ 1 per input slot, no self-loops, no dangling endpoints) are
/// enforced on every insertion and removal, so code iterating the graph can
/// assume every wire it sees is valid.
///
/// Ids are assigned monotonically and never reused; iteration over either
/// collection is in id order, which equals insertion order.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    components: BTreeMap<ComponentId, Component>,
    wires: BTreeMap<WireId, Wire>,
    next_component_id: usize,
    next_wire_id: usize,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of components in the circuit.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of wires in the circuit.
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Look up a component by id.
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(&id)
    }

    /// Look up a wire by id.
    pub fn wire(&self, id: WireId) -> Option<&Wire> {
        self.wires.get(&id)
    }

    /// Iterate all components in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Iterate all wires in insertion order.
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.wires.values()
    }

    /// The wire terminating at `(destination, slot)`, if that slot is wired.
    pub fn wire_at(&self, destination: ComponentId, slot: usize) -> Option<&Wire> {
        self.wires
            .values()
            .find(|w| w.destination == destination && w.slot == slot)
    }

    /// Iterate the wires originating at `source`'s output port.
    pub fn wires_from(&self, source: ComponentId) -> impl Iterator<Item = &Wire> {
        self.wires.values().filter(move |w| w.source == source)
    }

    /// Gather the signals arriving at `destination`'s input slots.
    ///
    /// Unwired slots carry [`Signal::Unknown`], which is exactly what the
    /// evaluation functions expect for an absent input.
    pub fn input_signals(&self, destination: ComponentId) -> [Signal; MAX_INPUT_SLOTS] {
        let mut inputs = [Signal::Unknown; MAX_INPUT_SLOTS];
        for wire in self.wires.values() {
            if wire.destination == destination && wire.slot < MAX_INPUT_SLOTS {
                if let Some(source) = self.components.get(&wire.source) {
                    inputs[wire.slot] = source.state;
                }
            }
        }
        inputs
    }

    /// Insert a new component in its kind's initial state.
    pub fn insert_component(&mut self, kind: ComponentKind, position: Point) -> ComponentId {
        let id = ComponentId(self.next_component_id);
        self.next_component_id += 1;
        self.components.insert(id, Component::new(id, kind, position));
        id
    }

    /// Remove a component and every wire touching it.
    ///
    /// Returns `false` (leaving the circuit untouched) if `id` is unknown.
    pub fn remove_component(&mut self, id: ComponentId) -> bool {
        if self.components.remove(&id).is_none() {
            return false;
        }
        self.wires
            .retain(|_, w| w.source != id && w.destination != id);
        true
    }

    /// Attach a validated wire, displacing the occupant of the destination
    /// slot if the spec names one.
    ///
    /// The spec must come from the wiring validator: endpoints exist, the
    /// destination slot is in range for its kind, and the endpoints differ.
    pub fn attach_wire(&mut self, spec: WireSpec) -> WireId {
        debug_assert_ne!(spec.source, spec.destination, "self-loop in wire spec");
        debug_assert!(self.components.contains_key(&spec.source));
        debug_assert!(self.components.contains_key(&spec.destination));

        if let Some(old) = spec.replaces {
            self.wires.remove(&old);
        }
        // The slot must be free now; anything else means the spec was built
        // against a stale circuit.
        debug_assert!(self.wire_at(spec.destination, spec.slot).is_none());

        let id = WireId(self.next_wire_id);
        self.next_wire_id += 1;
        self.wires.insert(
            id,
            Wire {
                id,
                source: spec.source,
                destination: spec.destination,
                slot: spec.slot,
            },
        );
        id
    }

    /// Remove a single wire. Returns `false` if `id` is unknown.
    pub fn detach_wire(&mut self, id: WireId) -> bool {
        self.wires.remove(&id).is_some()
    }

    /// Re-insert a component under its original id (snapshot restore path).
    ///
    /// Keeps the id counter ahead of every restored id so later insertions
    /// stay fresh.
    pub(crate) fn restore_component(&mut self, component: Component) {
        self.next_component_id = self.next_component_id.max(component.id.0 + 1);
        self.components.insert(component.id, component);
    }

    /// Re-insert a wire under its original id (snapshot restore path).
    ///
    /// Returns `false` if the id is already taken. Invariant checks are the
    /// snapshot loader's job; this only preserves identity.
    pub(crate) fn restore_wire(
        &mut self,
        id: WireId,
        source: ComponentId,
        destination: ComponentId,
        slot: usize,
    ) -> bool {
        if self.wires.contains_key(&id) {
            return false;
        }
        self.next_wire_id = self.next_wire_id.max(id.0 + 1);
        self.wires.insert(
            id,
            Wire {
                id,
                source,
                destination,
                slot,
            },
        );
        true
    }

    /// Set a component's state. Reserved for the propagation engine and the
    /// input-toggle path; external code reads states through [`components`].
    ///
    /// [`components`]: Circuit::components
    pub(crate) fn set_state(&mut self, id: ComponentId, state: Signal) {
        if let Some(component) = self.components.get_mut(&id) {
            component.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_inputs_and_gate() -> (Circuit, ComponentId, ComponentId, ComponentId) {
        let mut circuit = Circuit::new();
        let a = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        let b = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 100.0));
        let gate = circuit.insert_component(ComponentKind::And, Point::new(100.0, 50.0));
        (circuit, a, b, gate)
    }

    #[test]
    fn test_insert_assigns_fresh_ids() {
        let (circuit, a, b, gate) = two_inputs_and_gate();
        assert_eq!(circuit.component_count(), 3);
        assert_ne!(a, b);
        assert_ne!(b, gate);
        // Iteration follows insertion order
        let ids: Vec<_> = circuit.components().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, b, gate]);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut circuit = Circuit::new();
        let a = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        circuit.remove_component(a);
        let b = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_attach_wire_replaces_occupant() {
        let (mut circuit, a, b, gate) = two_inputs_and_gate();
        let first = circuit.attach_wire(WireSpec {
            source: a,
            destination: gate,
            slot: 0,
            replaces: None,
        });
        let second = circuit.attach_wire(WireSpec {
            source: b,
            destination: gate,
            slot: 0,
            replaces: Some(first),
        });
        assert_eq!(circuit.wire_count(), 1);
        let wire = circuit.wire_at(gate, 0).unwrap();
        assert_eq!(wire.id, second);
        assert_eq!(wire.source, b);
    }

    #[test]
    fn test_remove_component_cascades_to_wires() {
        let (mut circuit, a, b, gate) = two_inputs_and_gate();
        circuit.attach_wire(WireSpec {
            source: a,
            destination: gate,
            slot: 0,
            replaces: None,
        });
        circuit.attach_wire(WireSpec {
            source: b,
            destination: gate,
            slot: 1,
            replaces: None,
        });
        assert_eq!(circuit.wire_count(), 2);

        assert!(circuit.remove_component(gate));
        assert_eq!(circuit.wire_count(), 0);
        assert_eq!(circuit.component_count(), 2);

        // Unknown id is a no-op
        assert!(!circuit.remove_component(gate));
    }

    #[test]
    fn test_input_signals_by_slot() {
        let (mut circuit, a, b, gate) = two_inputs_and_gate();
        circuit.set_state(a, Signal::High);
        circuit.attach_wire(WireSpec {
            source: a,
            destination: gate,
            slot: 1,
            replaces: None,
        });

        let inputs = circuit.input_signals(gate);
        assert_eq!(inputs[0], Signal::Unknown);
        assert_eq!(inputs[1], Signal::High);

        circuit.attach_wire(WireSpec {
            source: b,
            destination: gate,
            slot: 0,
            replaces: None,
        });
        let inputs = circuit.input_signals(gate);
        assert_eq!(inputs[0], Signal::Low);
        assert_eq!(inputs[1], Signal::High);
    }

    #[test]
    fn test_detach_wire() {
        let (mut circuit, a, _, gate) = two_inputs_and_gate();
        let wire = circuit.attach_wire(WireSpec {
            source: a,
            destination: gate,
            slot: 0,
            replaces: None,
        });
        assert!(circuit.detach_wire(wire));
        assert!(!circuit.detach_wire(wire));
        assert_eq!(circuit.wire_count(), 0);
    }
}
