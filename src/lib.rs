//! # Gatesim Core
//!
//! The circuit model and live propagation engine of an interactive
//! logic-gate editor.
//!
//! This library provides:
//! - A circuit graph of gates (AND, OR, NOT), terminals (INPUT, OUTPUT),
//!   and the wires between their ports
//! - Wiring rules enforced by construction: fan-in ≤ 1 per input slot, no
//!   self-loops, output-to-input direction, rewire-by-reconnect
//! - A work-list propagation engine recomputing every derived state after
//!   each mutation
//! - Geometry-derived port hit-testing for the editing surface
//! - JSON snapshots for persistence and multi-viewer synchronization
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Circuit graph representation, wiring validation, port
//!   geometry, and snapshots
//! - [`components`] - Component kinds and their boolean evaluation rules
//! - [`solver`] - The propagation pass and the [`Simulator`] mutation API
//!
//! Rendering, drag handling, input devices, and network transport live
//! outside this crate; they drive it through [`Simulator`] and read states
//! back after every call.
//!
//! ## Usage
//!
//! ```
//! use gatesim_core::{ComponentKind, Point, Port, Signal, Simulator};
//!
//! let mut sim = Simulator::new();
//! let input = sim.add_component(ComponentKind::Input, Point::new(50.0, 100.0));
//! let not = sim.add_component(ComponentKind::Not, Point::new(150.0, 100.0));
//! let output = sim.add_component(ComponentKind::Output, Point::new(250.0, 100.0));
//!
//! sim.connect(Port::output(input), Port::input(not, 0))?;
//! sim.connect(Port::output(not), Port::input(output, 0))?;
//! assert_eq!(sim.state(output), Some(Signal::High));
//!
//! sim.toggle_input(input);
//! assert_eq!(sim.state(output), Some(Signal::Low));
//! # Ok::<(), gatesim_core::GatesimError>(())
//! ```
//!
//! ## Signal model
//!
//! Signals are tri-valued: `Low`, `High`, or `Unknown`. Gates are strict,
//! so a gate resolves only once every required input slot is wired and
//! definite; everything downstream of a missing input reads `Unknown`.
//! INPUT terminals are the only authoritative states and change only
//! through [`Simulator::toggle_input`].

pub mod circuit;
pub mod components;
pub mod error;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Circuit, CircuitSnapshot, ComponentId, Point, Port, Signal, WireId};
pub use components::{Component, ComponentKind};
pub use error::{GatesimError, Result};
pub use solver::{Simulator, SimulatorConfig};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;

/// Default radius of a port's hit region, in canvas pixels.
pub const DEFAULT_HIT_RADIUS: f32 = 5.0;

/// Minimum center-to-center spacing at which adjacent components' port hit
/// regions are guaranteed disjoint.
pub const MIN_COMPONENT_SPACING: f32 = 60.0;
