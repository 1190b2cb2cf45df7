//! Wire connection validation.

use crate::error::{GatesimError, Result};

use super::graph::{Circuit, WireSpec};
use super::types::Port;

/// Decide whether a proposed connection between two ports is legal.
///
/// The two ports may be given in either order; the output side becomes the
/// wire's source and the input side its destination. Rules, in order:
///
/// 1. Both endpoint components must exist ([`UnknownComponent`]).
/// 2. The endpoints must belong to different components ([`SelfConnection`]).
/// 3. Exactly one port must be an output and the other an input, and each
///    port must actually exist on its component's kind
///    ([`InvalidDirection`]).
///
/// If the destination slot is already occupied, the returned spec names the
/// occupant in `replaces`: attaching the spec rewires the slot rather than
/// stacking a second wire onto it.
///
/// No side effects; the mutation API applies the returned spec.
///
/// [`UnknownComponent`]: GatesimError::UnknownComponent
/// [`SelfConnection`]: GatesimError::SelfConnection
/// [`InvalidDirection`]: GatesimError::InvalidDirection
pub fn validate_connection(circuit: &Circuit, a: Port, b: Port) -> Result<WireSpec> {
    let kind_a = circuit
        .component(a.component)
        .ok_or(GatesimError::UnknownComponent { id: a.component })?
        .kind;
    let kind_b = circuit
        .component(b.component)
        .ok_or(GatesimError::UnknownComponent { id: b.component })?
        .kind;

    if a.component == b.component {
        return Err(GatesimError::SelfConnection);
    }

    let (source_port, source_kind, dest_port, dest_kind) = match (a.is_input(), b.is_input()) {
        (false, true) => (a, kind_a, b, kind_b),
        (true, false) => (b, kind_b, a, kind_a),
        _ => return Err(GatesimError::InvalidDirection),
    };

    // A hand-built port can name a side or slot the kind does not expose
    // (an OUTPUT terminal has no output port, NOT has no slot 1). Ports
    // resolved by hit-testing never trip these.
    if !source_kind.has_output() || dest_port.slot >= dest_kind.input_slots() {
        return Err(GatesimError::InvalidDirection);
    }

    let replaces = circuit
        .wire_at(dest_port.component, dest_port.slot)
        .map(|w| w.id);

    Ok(WireSpec {
        source: source_port.component,
        destination: dest_port.component,
        slot: dest_port.slot,
        replaces,
    })
}
