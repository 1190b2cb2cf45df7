//! Signal propagation pass.

use std::collections::HashSet;

use tracing::trace;

use crate::circuit::{Circuit, ComponentId, Signal};
use crate::components::ComponentKind;

/// Recompute every derived component state from the current input states
/// and wiring.
///
/// The pass resets every non-INPUT state to `Unknown`, seeds a work-list
/// with the INPUT terminals, and walks wires forward: each popped
/// component's successors are recomputed from their current input signals
/// and pushed when the recomputed state is definite. A component is
/// processed at most once per pass, so the pass terminates in time
/// proportional to the wire count.
///
/// The pass does not iterate to a fixed point: on cyclic wiring a
/// component already marked processed is not revisited even if an upstream
/// value changes later in the same pass, so feedback loops settle to
/// `Unknown` or first-pass values. Acyclic circuits always reach their
/// unique fixed point, regardless of pop order.
pub fn propagate(circuit: &mut Circuit) {
    let derived: Vec<ComponentId> = circuit
        .components()
        .filter(|c| c.kind != ComponentKind::Input)
        .map(|c| c.id)
        .collect();
    for id in derived {
        circuit.set_state(id, Signal::Unknown);
    }

    let mut worklist: Vec<ComponentId> = circuit
        .components()
        .filter(|c| c.kind == ComponentKind::Input)
        .map(|c| c.id)
        .collect();
    let mut processed: HashSet<ComponentId> = HashSet::new();

    while let Some(current) = worklist.pop() {
        if !processed.insert(current) {
            continue;
        }

        let successors: Vec<ComponentId> = circuit
            .wires_from(current)
            .map(|w| w.destination)
            .collect();

        for dest in successors {
            let Some(kind) = circuit.component(dest).map(|c| c.kind) else {
                continue;
            };
            let state = kind.evaluate(circuit.input_signals(dest));
            trace!("{} {} recomputed to {}", kind, dest, state);
            if state.is_known() {
                circuit.set_state(dest, state);
                worklist.push(dest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{validate_connection, Point, Port};

    fn wire(circuit: &mut Circuit, from: ComponentId, to: Port) {
        let spec = validate_connection(circuit, Port::output(from), to).unwrap();
        circuit.attach_wire(spec);
    }

    fn states(circuit: &Circuit) -> Vec<Signal> {
        circuit.components().map(|c| c.state).collect()
    }

    #[test]
    fn test_input_not_output_chain() {
        // Scenario: INPUT -> NOT -> OUTPUT
        let mut circuit = Circuit::new();
        let input = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        let not = circuit.insert_component(ComponentKind::Not, Point::new(100.0, 0.0));
        let out = circuit.insert_component(ComponentKind::Output, Point::new(200.0, 0.0));
        wire(&mut circuit, input, Port::input(not, 0));
        wire(&mut circuit, not, Port::input(out, 0));

        propagate(&mut circuit);
        assert_eq!(circuit.component(not).unwrap().state, Signal::High);
        assert_eq!(circuit.component(out).unwrap().state, Signal::High);

        circuit.set_state(input, Signal::High);
        propagate(&mut circuit);
        assert_eq!(circuit.component(out).unwrap().state, Signal::Low);
    }

    #[test]
    fn test_and_gate_both_inputs() {
        // Scenario: two INPUTs -> AND -> OUTPUT
        let mut circuit = Circuit::new();
        let a = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        let b = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 100.0));
        let and = circuit.insert_component(ComponentKind::And, Point::new(100.0, 50.0));
        let out = circuit.insert_component(ComponentKind::Output, Point::new(200.0, 50.0));
        wire(&mut circuit, a, Port::input(and, 0));
        wire(&mut circuit, b, Port::input(and, 1));
        wire(&mut circuit, and, Port::input(out, 0));

        circuit.set_state(a, Signal::High);
        propagate(&mut circuit);
        assert_eq!(circuit.component(out).unwrap().state, Signal::Low);

        circuit.set_state(b, Signal::High);
        propagate(&mut circuit);
        assert_eq!(circuit.component(out).unwrap().state, Signal::High);
    }

    #[test]
    fn test_half_wired_and_stays_unknown() {
        // An AND with only slot 0 wired never resolves
        let mut circuit = Circuit::new();
        let a = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        let and = circuit.insert_component(ComponentKind::And, Point::new(100.0, 0.0));
        wire(&mut circuit, a, Port::input(and, 0));

        circuit.set_state(a, Signal::High);
        propagate(&mut circuit);
        assert_eq!(circuit.component(and).unwrap().state, Signal::Unknown);
    }

    #[test]
    fn test_or_gate() {
        let mut circuit = Circuit::new();
        let a = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        let b = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 100.0));
        let or = circuit.insert_component(ComponentKind::Or, Point::new(100.0, 50.0));
        wire(&mut circuit, a, Port::input(or, 0));
        wire(&mut circuit, b, Port::input(or, 1));

        propagate(&mut circuit);
        assert_eq!(circuit.component(or).unwrap().state, Signal::Low);

        circuit.set_state(b, Signal::High);
        propagate(&mut circuit);
        assert_eq!(circuit.component(or).unwrap().state, Signal::High);
    }

    #[test]
    fn test_fan_out_reaches_all_destinations() {
        // One INPUT driving two NOT gates
        let mut circuit = Circuit::new();
        let input = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        let n1 = circuit.insert_component(ComponentKind::Not, Point::new(100.0, 0.0));
        let n2 = circuit.insert_component(ComponentKind::Not, Point::new(100.0, 100.0));
        wire(&mut circuit, input, Port::input(n1, 0));
        wire(&mut circuit, input, Port::input(n2, 0));

        circuit.set_state(input, Signal::High);
        propagate(&mut circuit);
        assert_eq!(circuit.component(n1).unwrap().state, Signal::Low);
        assert_eq!(circuit.component(n2).unwrap().state, Signal::Low);
    }

    #[test]
    fn test_deep_chain_propagates_fully() {
        let mut circuit = Circuit::new();
        let input = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        let mut prev = input;
        let mut gates = Vec::new();
        for i in 0..8 {
            let not =
                circuit.insert_component(ComponentKind::Not, Point::new(100.0 * (i + 1) as f32, 0.0));
            wire(&mut circuit, prev, Port::input(not, 0));
            gates.push(not);
            prev = not;
        }

        propagate(&mut circuit);
        // Input is Low; parity alternates down the chain
        for (i, gate) in gates.iter().enumerate() {
            let expected = Signal::from(i % 2 == 0);
            assert_eq!(circuit.component(*gate).unwrap().state, expected);
        }
    }

    #[test]
    fn test_idempotent_between_mutations() {
        let mut circuit = Circuit::new();
        let a = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        let b = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 100.0));
        let or = circuit.insert_component(ComponentKind::Or, Point::new(100.0, 50.0));
        let not = circuit.insert_component(ComponentKind::Not, Point::new(200.0, 50.0));
        wire(&mut circuit, a, Port::input(or, 0));
        wire(&mut circuit, b, Port::input(or, 1));
        wire(&mut circuit, or, Port::input(not, 0));
        circuit.set_state(a, Signal::High);

        propagate(&mut circuit);
        let first = states(&circuit);
        propagate(&mut circuit);
        assert_eq!(states(&circuit), first);
    }

    #[test]
    fn test_disconnected_gate_resets_to_unknown() {
        // Scenario: a gate that lost its input reverts to Unknown
        let mut circuit = Circuit::new();
        let input = circuit.insert_component(ComponentKind::Input, Point::new(0.0, 0.0));
        let not = circuit.insert_component(ComponentKind::Not, Point::new(100.0, 0.0));
        wire(&mut circuit, input, Port::input(not, 0));

        propagate(&mut circuit);
        assert_eq!(circuit.component(not).unwrap().state, Signal::High);

        circuit.remove_component(input);
        propagate(&mut circuit);
        assert_eq!(circuit.component(not).unwrap().state, Signal::Unknown);
    }

    #[test]
    fn test_cycle_stays_unknown() {
        // Feedback wiring is not settled: two cross-coupled OR gates with no
        // driven input never leave Unknown.
        let mut circuit = Circuit::new();
        let g1 = circuit.insert_component(ComponentKind::Or, Point::new(0.0, 0.0));
        let g2 = circuit.insert_component(ComponentKind::Or, Point::new(100.0, 0.0));
        wire(&mut circuit, g1, Port::input(g2, 0));
        wire(&mut circuit, g2, Port::input(g1, 0));

        propagate(&mut circuit);
        assert_eq!(circuit.component(g1).unwrap().state, Signal::Unknown);
        assert_eq!(circuit.component(g2).unwrap().state, Signal::Unknown);
    }
}
