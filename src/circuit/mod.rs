//! Circuit graph representation, wiring rules, and snapshots.
//!
//! This module owns the authoritative picture of the circuit: the
//! [`Circuit`] struct holds every component and wire, enforces the
//! structural invariants (fan-in ≤ 1 per input slot, no self-loops, cascade
//! deletion), and answers the geometry and snapshot queries the surrounding
//! layers need.

mod graph;
mod ports;
mod snapshot;
mod types;
mod validate;

pub use graph::{Circuit, Wire, WireSpec};
pub use ports::{input_port_position, output_port_position, port_position, resolve_port};
pub use snapshot::{CircuitSnapshot, ComponentSnapshot, WireSnapshot};
pub use types::*;
pub use validate::validate_connection;
