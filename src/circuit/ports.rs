//! Geometry-derived port positions and hit-testing.
//!
//! Ports are not stored anywhere: they are computed from a component's kind
//! and position using the same fixed offsets the renderer draws them at.
//! Gates are 40x40 boxes, so their ports sit just outside the body at x±25;
//! the two input ports of AND/OR are spread ±15 vertically. Terminals are
//! radius-15 circles with their single port at x±19.

use super::graph::Circuit;
use super::types::{Point, Port};
use crate::components::{Component, ComponentKind};

/// Horizontal offset from a gate's center to its ports.
const GATE_PORT_X: f32 = 25.0;

/// Vertical spread of the two input ports on AND/OR gates.
const GATE_INPUT_SPREAD: f32 = 15.0;

/// Horizontal offset from a terminal's center to its single port.
const TERMINAL_PORT_X: f32 = 19.0;

/// Position of an input port, or `None` if the kind has no such slot.
pub fn input_port_position(kind: ComponentKind, position: Point, slot: usize) -> Option<Point> {
    if slot >= kind.input_slots() {
        return None;
    }
    match kind {
        ComponentKind::And | ComponentKind::Or => {
            let dy = if slot == 0 {
                -GATE_INPUT_SPREAD
            } else {
                GATE_INPUT_SPREAD
            };
            Some(position.offset(-GATE_PORT_X, dy))
        }
        ComponentKind::Not => Some(position.offset(-GATE_PORT_X, 0.0)),
        ComponentKind::Output => Some(position.offset(-TERMINAL_PORT_X, 0.0)),
        ComponentKind::Input => None,
    }
}

/// Position of the output port, or `None` if the kind has no output.
pub fn output_port_position(kind: ComponentKind, position: Point) -> Option<Point> {
    match kind {
        ComponentKind::And | ComponentKind::Or | ComponentKind::Not => {
            Some(position.offset(GATE_PORT_X, 0.0))
        }
        ComponentKind::Input => Some(position.offset(TERMINAL_PORT_X, 0.0)),
        ComponentKind::Output => None,
    }
}

/// Position of a resolved port on its component.
///
/// Returns `None` if the component's kind does not expose the named port.
pub fn port_position(component: &Component, port: Port) -> Option<Point> {
    if port.component != component.id {
        return None;
    }
    if port.is_input() {
        input_port_position(component.kind, component.position, port.slot)
    } else {
        output_port_position(component.kind, component.position)
    }
}

/// Find the port whose hit region contains `point`.
///
/// Components are scanned in insertion order, input ports before the output
/// port within each component, and the first port within `radius` of the
/// point wins. Side-effect-free; returns `None` when nothing is hit.
pub fn resolve_port(circuit: &Circuit, point: Point, radius: f32) -> Option<Port> {
    for component in circuit.components() {
        for slot in 0..component.kind.input_slots() {
            if let Some(pos) = input_port_position(component.kind, component.position, slot) {
                if point.distance(pos) < radius {
                    return Some(Port::input(component.id, slot));
                }
            }
        }
        if let Some(pos) = output_port_position(component.kind, component.position) {
            if point.distance(pos) < radius {
                return Some(Port::output(component.id));
            }
        }
    }
    None
}
